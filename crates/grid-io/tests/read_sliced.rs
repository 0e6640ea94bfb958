//! Reader-contract scenarios against the in-memory source.

use chrono::{TimeZone, Utc};
use ndarray::{ArrayD, IxDyn};

use grid_core::{CoordValue, GridError};
use grid_io::{GridSink, GridSource, MemorySink, MemorySource};
use grid_select::SelectionRequest;
use test_utils::{daily_time_axis, latlon_coords, sequential_grid, time_latlon_grid};

fn sequential_data(shape: &[usize]) -> ArrayD<f64> {
    let len: usize = shape.iter().product();
    ArrayD::from_shape_vec(IxDyn(shape), (0..len).map(|i| i as f64).collect()).unwrap()
}

#[test]
fn single_variable_read_without_name() {
    let source = MemorySource::new(latlon_coords(4, 3))
        .with_variable("temperature", sequential_data(&[4, 3]))
        .unwrap();

    let grid = source.read(None, &SelectionRequest::new()).unwrap();
    assert_eq!(grid.title(), "temperature");
    assert_eq!(grid.shape(), &[4, 3]);
}

#[test]
fn multiple_variables_require_a_name() {
    let source = MemorySource::new(latlon_coords(4, 3))
        .with_variable("temperature", sequential_data(&[4, 3]))
        .unwrap()
        .with_variable("humidity", sequential_data(&[4, 3]))
        .unwrap();

    let err = source.read(None, &SelectionRequest::new()).unwrap_err();
    assert!(matches!(err, GridError::AmbiguousVariable(names)
        if names.contains("temperature") && names.contains("humidity")));

    let grid = source.read(Some("humidity"), &SelectionRequest::new()).unwrap();
    assert_eq!(grid.title(), "humidity");

    assert!(matches!(
        source.read(Some("pressure"), &SelectionRequest::new()),
        Err(GridError::UnknownVariable(name)) if name == "pressure"
    ));
}

#[test]
fn read_materializes_only_the_requested_region() {
    let source = MemorySource::new(latlon_coords(6, 4))
        .with_variable("var", sequential_data(&[6, 4]))
        .unwrap();

    let request = SelectionRequest::new()
        .range("lat", 2.0, 4.0)
        .range("lon", 1.0, 2.0);
    let grid = source.read(None, &request).unwrap();

    assert_eq!(grid.shape(), &[3, 2]);
    // value at (lat=2, lon=1) in the full 6x4 array is 2 * 4 + 1
    assert!((grid.data()[[0, 0]] - 9.0).abs() < 1e-12);
    // the sliced axes match the sliced data
    assert_eq!(grid.coords().get("lat").unwrap().len(), 3);
    assert_eq!(
        grid.coords().get("lat").unwrap().get(0),
        Some(CoordValue::Number(2.0))
    );
}

#[test]
fn fill_values_become_nan_on_read() {
    let mut data = sequential_data(&[4, 3]);
    data[[1, 1]] = -9999.0;
    data[[2, 0]] = -9999.0;

    let source = MemorySource::new(latlon_coords(4, 3))
        .with_fill_value(-9999.0)
        .with_variable("var", data)
        .unwrap();

    let grid = source.read(None, &SelectionRequest::new()).unwrap();
    assert!(grid.data()[[1, 1]].is_nan());
    assert!(grid.data()[[2, 0]].is_nan());
    assert!((grid.data()[[0, 0]] - 0.0).abs() < 1e-12);
}

#[test]
fn temporal_request_through_the_reader() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut coords = grid_core::CoordinateSet::new();
    coords.insert(daily_time_axis(start, 10)).unwrap();

    let source = MemorySource::new(coords)
        .with_variable("series", sequential_data(&[10]))
        .unwrap();

    let request = SelectionRequest::new().range(
        "time",
        start + chrono::Duration::days(2),
        start + chrono::Duration::days(5),
    );
    let grid = source.read(None, &request).unwrap();
    assert_eq!(grid.shape(), &[4]);
    assert!((grid.data()[[0]] - 2.0).abs() < 1e-12);
}

#[test]
fn variable_shape_must_match_coordinates() {
    let result = MemorySource::new(latlon_coords(4, 3))
        .with_variable("bad", sequential_data(&[3, 4]));
    assert!(matches!(result, Err(GridError::ShapeMismatch(_))));
}

#[test]
fn sink_captures_grids_in_order() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let first = time_latlon_grid(start, 3, 2, 2, "first");
    let second = sequential_grid(latlon_coords(2, 2), "second");

    let mut sink = MemorySink::new();
    sink.write(&first).unwrap();
    sink.write(&second).unwrap();

    assert_eq!(sink.grids().len(), 2);
    assert_eq!(sink.grids()[0].title(), "first");
    // the ordered axis mapping and temporal encoding survive the write
    let names: Vec<&str> = sink.grids()[0].coords().names().collect();
    assert_eq!(names, vec!["time", "lat", "lon"]);
    assert!(sink.grids()[0].coords().get("time").unwrap().is_temporal());
}
