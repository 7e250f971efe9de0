use std::{
    io::Write,
    process::{Command, Stdio},
};

use twinroute::{
    api::{
        BatchRunner, InProcessRunner, RouteRequest, RouteResponse, SubprocessRunner,
        process_request,
    },
    prelude::*,
};

const TWIN_ROUTE: &str = env!("CARGO_BIN_EXE_twin_route");
const ROUTE_API: &str = env!("CARGO_BIN_EXE_route_api");

fn request_from_instance(path: &str) -> RouteRequest {
    let graph = CityGraph::try_read_instance_file(path).unwrap();
    let name = |u| graph.name_of(u).unwrap().to_string();

    RouteRequest {
        selected_cities: graph.names().to_vec(),
        selected_routes: graph
            .edges()
            .iter()
            .map(|&Edge(u, v)| (name(u), name(v)))
            .collect(),
    }
}

fn unknown_city_request() -> RouteRequest {
    RouteRequest {
        selected_cities: vec!["W".into(), "E".into()],
        selected_routes: vec![("W".into(), "X".into())],
    }
}

fn assert_runners_agree(request: &RouteRequest) {
    for strategy in Strategy::ALL {
        let child = SubprocessRunner::new(TWIN_ROUTE).arg(strategy.to_string());
        let in_process = InProcessRunner::new(strategy);

        assert_eq!(
            process_request(&child, request).unwrap(),
            process_request(&in_process, request).unwrap(),
            "{strategy}"
        );
    }
}

#[test]
fn canada_through_child_process() {
    let request = request_from_instance("instances/canada.in");
    assert_runners_agree(&request);

    let response =
        process_request(&SubprocessRunner::new(TWIN_ROUTE).arg("dp"), &request).unwrap();
    assert_eq!(response.result[0], "7");
    assert_eq!(response.result.len(), 9);
}

#[test]
fn no_solution_through_child_process() {
    assert_runners_agree(&request_from_instance("instances/disconnected.in"));
}

#[test]
fn invalid_input_through_child_process() {
    let request = unknown_city_request();
    assert_runners_agree(&request);

    let response = process_request(&SubprocessRunner::new(TWIN_ROUTE), &request).unwrap();
    assert_eq!(
        response.result,
        vec!["Invalid city name: `X` is not a declared city"]
    );

    let response =
        process_request(&SubprocessRunner::new(TWIN_ROUTE), &RouteRequest::default()).unwrap();
    assert_eq!(response.result, vec!["No Solution!"]);

    let lines = SubprocessRunner::new(TWIN_ROUTE)
        .run_with_input("2 1\nW\n")
        .unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Invalid input"), "{lines:?}");
}

#[test]
fn silent_failure_is_an_error() {
    let runner = SubprocessRunner::new(TWIN_ROUTE).arg("no-such-command");
    // the child may exit before its stdin is written
    assert!(runner.run_with_input("2 1\nW\nE\nW E\n").is_err());
}

#[test]
fn json_api_with_child_solver() {
    let request = request_from_instance("instances/canada.in");

    for extra in [vec![], vec!["--solver", TWIN_ROUTE]] {
        let mut child = Command::new(ROUTE_API)
            .args(["-s", "flow"])
            .args(&extra)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();

        serde_json::to_writer(child.stdin.take().unwrap(), &request).unwrap();
        let output = child.wait_with_output().unwrap();
        assert!(output.status.success(), "{extra:?}");

        let response: RouteResponse = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(
            response,
            process_request(&InProcessRunner::new(Strategy::Flow), &request).unwrap()
        );
    }

    let mut child = Command::new(ROUTE_API)
        .args(["--solver", TWIN_ROUTE])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(serde_json::to_string(&unknown_city_request()).unwrap().as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    let response: RouteResponse = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        response.result,
        vec!["Invalid city name: `X` is not a declared city"]
    );
}
