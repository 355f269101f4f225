use odata_intake::InterpretError;
use odata_intake::path::query::extract_query_parameters;
use odata_intake::path::resolver::{resolve_path_info, trailing_slash_redirect};
use odata_intake::path::segment::PathSegment;
use odata_intake::path::target::RequestTarget;

fn target(context_path: &str, servlet_path: &str, request_path: &str) -> RequestTarget {
    RequestTarget {
        scheme: "http".to_string(),
        server_name: "localhost".to_string(),
        server_port: 8080,
        context_path: context_path.to_string(),
        servlet_path: servlet_path.to_string(),
        request_path: request_path.to_string(),
        query_string: None,
    }
}

fn paths(segments: &[PathSegment]) -> Vec<&str> {
    segments.iter().map(|s| s.path()).collect()
}

#[test]
fn test_split_point_zero_keeps_all_segments_as_protocol() {
    let info = resolve_path_info(&target("", "/svc", "/svc/Products(1)/Name"), 0).unwrap();

    assert!(info.preceding_segments.is_empty());
    assert_eq!(paths(&info.protocol_segments), ["Products(1)", "Name"]);
    assert_eq!(info.service_root.as_str(), "http://localhost:8080/svc/");
}

#[test]
fn test_split_point_two() {
    let info = resolve_path_info(&target("/ctx", "/svc", "/ctx/svc/a/b/Entities('1')"), 2).unwrap();

    assert_eq!(paths(&info.preceding_segments), ["a", "b"]);
    assert_eq!(paths(&info.protocol_segments), ["Entities('1')"]);
    assert!(info.service_root.as_str().ends_with("/ctx/svc/a/b/"));
    assert_eq!(info.service_root.as_str(), "http://localhost:8080/ctx/svc/a/b/");
}

#[test]
fn test_url_too_short() {
    let err = resolve_path_info(&target("", "", "/a/b"), 3).unwrap_err();

    assert!(matches!(
        err,
        InterpretError::UrlTooShort {
            segments: 2,
            required: 3
        }
    ));
}

#[test]
fn test_exact_split_point_leaves_no_protocol_segments() {
    let info = resolve_path_info(&target("", "", "/a/b"), 2).unwrap();

    assert_eq!(paths(&info.preceding_segments), ["a", "b"]);
    assert!(info.protocol_segments.is_empty());
}

#[test]
fn test_trailing_slash_produces_empty_segment() {
    let info = resolve_path_info(&target("", "/svc", "/svc/Products/"), 0).unwrap();

    assert_eq!(paths(&info.protocol_segments), ["Products", ""]);
}

#[test]
fn test_service_root_request_has_single_empty_segment() {
    let info = resolve_path_info(&target("", "/svc", "/svc/"), 0).unwrap();

    assert_eq!(paths(&info.protocol_segments), [""]);
}

#[test]
fn test_interior_empty_segments_are_kept() {
    let info = resolve_path_info(&target("", "", "//a//b"), 0).unwrap();

    assert_eq!(paths(&info.protocol_segments), ["a", "", "b"]);
}

#[test]
fn test_matrix_parameter_on_protocol_segment_is_not_found() {
    let err = resolve_path_info(&target("", "", "/Entities;foo=1('1')"), 0).unwrap_err();

    match err {
        InterpretError::MatrixParameters { names, path } => {
            assert_eq!(names, ["foo"]);
            assert_eq!(path, "Entities");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_matrix_parameter_after_preceding_prefix_is_not_found() {
    let err = resolve_path_info(&target("", "", "/tenant/Products;a=1;b"), 1).unwrap_err();

    match err {
        InterpretError::MatrixParameters { names, path } => {
            assert_eq!(names, ["a", "b"]);
            assert_eq!(path, "Products");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_preceding_segment_matrix_parameters() {
    let info = resolve_path_info(&target("", "", "/seg;k=1,2;m=x/Products"), 1).unwrap();

    let segment = &info.preceding_segments[0];
    assert_eq!(segment.path(), "seg");
    assert_eq!(segment.matrix_parameters().len(), 2);
    assert_eq!(segment.matrix_parameter("k").unwrap(), ["1", "2"]);
    assert_eq!(segment.matrix_parameter("m").unwrap(), ["x"]);
    assert_eq!(
        info.service_root.as_str(),
        "http://localhost:8080/seg;k=1,2;m=x/"
    );
}

#[test]
fn test_preceding_segments_are_decoded_protocol_segments_are_not() {
    let info = resolve_path_info(&target("", "", "/my%20tenant/Products('a%20b')"), 1).unwrap();

    assert_eq!(info.preceding_segments[0].path(), "my tenant");
    assert_eq!(info.protocol_segments[0].path(), "Products('a%20b')");
    assert_eq!(
        info.service_root.as_str(),
        "http://localhost:8080/my%20tenant/"
    );
}

#[test]
fn test_service_root_reencodes_matrix_values() {
    let info = resolve_path_info(&target("", "", "/t;name=a%2Cb%20c/X"), 1).unwrap();

    assert_eq!(
        info.preceding_segments[0].matrix_parameter("name").unwrap(),
        ["a,b c"]
    );
    assert_eq!(
        info.service_root.as_str(),
        "http://localhost:8080/t;name=a%2Cb%20c/"
    );
}

#[test]
fn test_bare_matrix_parameter_on_preceding_segment() {
    let info = resolve_path_info(&target("", "", "/t;flag/X"), 1).unwrap();

    assert_eq!(info.preceding_segments[0].matrix_parameter("flag").unwrap(), [""]);
    assert_eq!(info.service_root.as_str(), "http://localhost:8080/t;flag=/");
}

#[test]
fn test_request_uri_includes_query() {
    let mut t = target("", "/svc", "/svc/Products");
    t.query_string = Some("$top=2&$format=json".to_string());

    let info = resolve_path_info(&t, 0).unwrap();

    assert_eq!(
        info.request_uri.as_str(),
        "http://localhost:8080/svc/Products?$top=2&$format=json"
    );
}

#[test]
fn test_request_uri_without_query() {
    let info = resolve_path_info(&target("", "/svc", "/svc/Products('1')"), 0).unwrap();

    assert_eq!(info.request_uri.query(), None);
    assert_eq!(
        info.request_uri.as_str(),
        "http://localhost:8080/svc/Products('1')"
    );
}

#[test]
fn test_default_port_is_omitted() {
    let mut t = target("", "/svc", "/svc/");
    t.scheme = "https".to_string();
    t.server_port = 443;

    let info = resolve_path_info(&t, 0).unwrap();

    assert_eq!(info.service_root.as_str(), "https://localhost/svc/");
}

#[test]
fn test_invalid_host_is_internal_error() {
    let mut t = target("", "/svc", "/svc/");
    t.server_name = "bad host".to_string();

    let err = resolve_path_info(&t, 0).unwrap_err();

    assert!(matches!(err, InterpretError::Uri(_)));
}

#[test]
fn test_logical_path() {
    assert_eq!(target("/ctx", "/svc", "/ctx/svc/A").logical_path(), "/A");
    assert_eq!(target("", "/svc", "/svc/A").logical_path(), "/A");
    assert_eq!(target("/ctx", "", "/ctx/A").logical_path(), "/A");
    assert_eq!(target("", "", "/A").logical_path(), "/A");
}

#[test]
fn test_logical_path_stops_at_segment_boundary() {
    assert_eq!(target("/ctx", "", "/ctxfoo/A").logical_path(), "/ctxfoo/A");
    assert_eq!(target("", "/svc", "/svcProducts").logical_path(), "/svcProducts");
    assert_eq!(target("/ctx", "/svc", "/ctx/svcX/A").logical_path(), "/svcX/A");
}

#[test]
fn test_unmounted_path_is_not_split_inside_a_segment() {
    let info = resolve_path_info(&target("", "/svc", "/svcProducts"), 0).unwrap();

    assert_eq!(paths(&info.protocol_segments), ["svcProducts"]);
}

#[test]
fn test_server_name_with_url_delimiters_is_rejected() {
    for name in ["example.com?x=", "evil.com/x", "user@evil.com", "evil.com#frag"] {
        let mut t = target("", "/svc", "/svc/Products");
        t.server_name = name.to_string();

        let err = resolve_path_info(&t, 0).unwrap_err();

        assert!(matches!(err, InterpretError::Uri(_)), "{name}: {err:?}");
    }
}

#[test]
fn test_trailing_slash_redirect() {
    assert_eq!(
        trailing_slash_redirect(&target("/context-path", "/servlet-path", "/context-path/servlet-path"))
            .as_deref(),
        Some("/context-path/servlet-path/")
    );
    assert_eq!(
        trailing_slash_redirect(&target("/context-path", "", "/context-path")).as_deref(),
        Some("/context-path/")
    );
    assert_eq!(
        trailing_slash_redirect(&target("", "/servlet-path", "/servlet-path")).as_deref(),
        Some("/servlet-path/")
    );
    assert_eq!(trailing_slash_redirect(&target("", "", "")).as_deref(), Some("/"));
    assert_eq!(
        trailing_slash_redirect(&target("/context-path", "/servlet-path", "/context-path/servlet-path/")),
        None
    );
}

#[test]
fn test_query_parameters() {
    let params = extract_query_parameters(Some("$top=10&$skip=&name=J%C3%BCrgen&flag&&a=1&a=2"));

    assert_eq!(params["$top"], "10");
    assert_eq!(params["$skip"], "");
    assert_eq!(params["name"], "Jürgen");
    assert_eq!(params["flag"], "");
    assert_eq!(params["a"], "2");
    assert_eq!(params.len(), 5);
}

#[test]
fn test_query_parameters_absent() {
    assert!(extract_query_parameters(None).is_empty());
    assert!(extract_query_parameters(Some("")).is_empty());
}

#[test]
fn test_query_value_keeps_equals_signs() {
    let params = extract_query_parameters(Some("$filter=a%20eq%201&token=abc=="));

    assert_eq!(params["$filter"], "a eq 1");
    assert_eq!(params["token"], "abc==");
}

#[test]
fn test_rejected_matrix_names_are_sorted_and_unique() {
    let err = resolve_path_info(&target("", "", "/Products;b=1;a;b=2"), 0).unwrap_err();

    match err {
        InterpretError::MatrixParameters { names, .. } => assert_eq!(names, ["a", "b"]),
        other => panic!("unexpected error: {other:?}"),
    }
}
