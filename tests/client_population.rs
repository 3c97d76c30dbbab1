// tests/client_population.rs
//! End-to-end population of the item cache over scripted transports.

mod common;

use common::{fixture, test_config, two_page_search, ScriptedTransport, SEARCH_PAGE_1, SEARCH_PAGE_2};
use notion_items::{
    AsyncNotionClient, ClientError, Color, HttpMethod, NotionClient, ObjectKind, PaginationError,
    RetrievePage,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_two_page_search_populates_and_resolves() {
    let transport = ScriptedTransport::new(two_page_search());
    let mut client = NotionClient::with_transport(test_config(), &transport);

    let items = client.items().unwrap();
    assert_eq!(items.len(), 3);

    let d1 = items.get("d1").unwrap();
    let p1 = items.get("p1").unwrap();
    let p2 = items.get("p2").unwrap();

    assert_eq!(d1.kind(), ObjectKind::Database);
    assert_eq!(d1.title(), "Reading List");
    assert_eq!(d1.name(), "");
    assert_eq!(d1.title_rich()[1].annotations.color, Color::Blue);

    assert_eq!(p1.name(), "Dune");
    assert_eq!(p1.parent_id().map(|id| id.as_str()), Some("d1"));
    assert!(Arc::ptr_eq(items.parent_of(p1).unwrap(), d1));

    assert_eq!(p2.parent_id(), None);
    assert!(items.parent_of(p2).is_none());
    assert_eq!(p2.name(), "");
    assert!(p2.title_rich().is_empty());

    let children: Vec<&str> = items.children_of("d1").map(|c| c.id().as_str()).collect();
    assert_eq!(children, vec!["p1"]);
    assert_eq!(items.unresolved().count(), 0);

    assert_eq!(transport.calls(), 2);
}

#[test]
fn test_one_request_per_page() {
    let transport = ScriptedTransport::new(two_page_search());
    let mut client = NotionClient::with_transport(test_config(), &transport);
    client.items().unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    for request in &sent {
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "search");
    }
    assert_eq!(
        sent[0].body.clone().unwrap().into_value(),
        json!({"page_size": 100})
    );
    assert_eq!(
        sent[1].body.clone().unwrap().into_value(),
        json!({"start_cursor": "c2", "page_size": 100})
    );
}

#[test]
fn test_second_call_does_not_refetch() {
    let transport = ScriptedTransport::new(two_page_search());
    let mut client = NotionClient::with_transport(test_config(), &transport);

    let first = client.items().unwrap().clone();
    let second = client.items().unwrap();
    assert_eq!(&first, second);
    assert_eq!(transport.calls(), 2);
}

#[test]
fn test_network_error_mid_drain_is_surfaced_then_retried() {
    let transport = ScriptedTransport::new(vec![
        Ok(fixture(SEARCH_PAGE_1)),
        Err(ClientError::MalformedResponse("connection reset".into())),
    ]);
    let mut client = NotionClient::with_transport(test_config(), &transport);

    assert!(matches!(
        client.items(),
        Err(ClientError::MalformedResponse(_))
    ));
    assert!(client.cached_items().is_none());

    for reply in two_page_search() {
        transport.push(reply);
    }
    assert_eq!(client.items().unwrap().len(), 3);
    assert_eq!(transport.calls(), 4);
}

#[test]
fn test_missing_has_more_aborts_population() {
    let transport = ScriptedTransport::new(vec![Ok(json!({
        "results": [],
        "next_cursor": null
    }))]);
    let mut client = NotionClient::with_transport(test_config(), &transport);

    assert!(matches!(
        client.items(),
        Err(ClientError::Pagination(PaginationError::MissingField("has_more")))
    ));
    assert_eq!(transport.calls(), 1);
}

#[test]
fn test_has_more_without_cursor_aborts_population() {
    let transport = ScriptedTransport::new(vec![Ok(json!({
        "results": [],
        "next_cursor": null,
        "has_more": true
    }))]);
    let mut client = NotionClient::with_transport(test_config(), &transport);

    assert!(matches!(
        client.items(),
        Err(ClientError::Pagination(PaginationError::MissingCursor))
    ));
}

#[test]
fn test_invalid_record_aborts_population() {
    let transport = ScriptedTransport::new(vec![Ok(json!({
        "results": [{"object": "page", "created_time": "x", "last_edited_time": "x"}],
        "next_cursor": null,
        "has_more": false
    }))]);
    let mut client = NotionClient::with_transport(test_config(), &transport);

    assert!(matches!(client.items(), Err(ClientError::Validation(_))));
    assert!(client.cached_items().is_none());
}

#[test]
fn test_child_before_parent_across_pages() {
    let transport = ScriptedTransport::new(vec![
        Ok(json!({
            "results": [{
                "object": "page",
                "id": "child",
                "created_time": "2021-05-13T10:00:00.000Z",
                "last_edited_time": "2021-05-13T10:00:00.000Z",
                "properties": {},
                "parent": {"type": "page_id", "page_id": "root"}
            }],
            "next_cursor": "c2",
            "has_more": true
        })),
        Ok(json!({
            "results": [{
                "object": "page",
                "id": "root",
                "created_time": "2021-05-13T10:00:00.000Z",
                "last_edited_time": "2021-05-13T10:00:00.000Z",
                "properties": {}
            }],
            "next_cursor": null,
            "has_more": false
        })),
    ]);
    let mut client = NotionClient::with_transport(test_config(), &transport);
    let items = client.items().unwrap();

    let child = items.get("child").unwrap();
    let root = items.get("root").unwrap();
    assert!(Arc::ptr_eq(items.parent_of(child).unwrap(), root));
    let chain: Vec<&str> = items.ancestors(child).map(|a| a.id().as_str()).collect();
    assert_eq!(chain, vec!["root"]);
}

#[test]
fn test_item_repeated_across_pages_keeps_parent_identity() {
    let mut second_page = fixture(SEARCH_PAGE_2);
    let repeated_database = fixture(SEARCH_PAGE_1)["results"][0].clone();
    second_page["results"]
        .as_array_mut()
        .unwrap()
        .push(repeated_database);

    let transport = ScriptedTransport::new(vec![Ok(fixture(SEARCH_PAGE_1)), Ok(second_page)]);
    let mut client = NotionClient::with_transport(test_config(), &transport);
    let items = client.items().unwrap();

    assert_eq!(items.len(), 3);
    let p1 = items.get("p1").unwrap();
    assert!(Arc::ptr_eq(
        items.parent_of(p1).unwrap(),
        items.get("d1").unwrap()
    ));
    let children: Vec<&str> = items.children_of("d1").map(|c| c.id().as_str()).collect();
    assert_eq!(children, vec!["p1"]);
}

#[test]
fn test_child_repeated_with_new_parent_is_relinked() {
    let moved = json!({
        "results": [{
            "object": "page",
            "id": "p1",
            "created_time": "2021-05-13T11:00:00.000Z",
            "last_edited_time": "2021-05-16T11:00:00.000Z",
            "properties": {},
            "parent": {"type": "page_id", "page_id": "p2"}
        }],
        "next_cursor": null,
        "has_more": false
    });
    let mut second_page = fixture(SEARCH_PAGE_2);
    second_page["has_more"] = json!(true);
    second_page["next_cursor"] = json!("c3");

    let transport = ScriptedTransport::new(vec![
        Ok(fixture(SEARCH_PAGE_1)),
        Ok(second_page),
        Ok(moved),
    ]);
    let mut client = NotionClient::with_transport(test_config(), &transport);
    let items = client.items().unwrap();

    let p1 = items.get("p1").unwrap();
    assert_eq!(p1.parent_id().map(|id| id.as_str()), Some("p2"));
    assert!(Arc::ptr_eq(
        items.parent_of(p1).unwrap(),
        items.get("p2").unwrap()
    ));
    assert_eq!(items.children_of("d1").count(), 0);
    assert_eq!(transport.calls(), 3);
}

#[test]
fn test_send_forwards_typed_endpoint() {
    let transport = ScriptedTransport::new(vec![Ok(json!({"object": "page", "id": "p1"}))]);
    let client = NotionClient::with_transport(test_config(), &transport);

    let reply = client.send(&RetrievePage::new("p1")).unwrap();
    assert_eq!(reply["id"], "p1");

    let sent = transport.sent();
    assert_eq!(sent[0].method, HttpMethod::Get);
    assert_eq!(sent[0].path, "pages/p1");
    assert!(sent[0].body.is_none());
}

#[tokio::test]
async fn test_async_client_matches_blocking_client() {
    let transport = ScriptedTransport::new(two_page_search());
    let mut client = AsyncNotionClient::with_transport(test_config(), &transport);

    let items = client.items().await.unwrap();
    assert_eq!(items.len(), 3);
    let p1 = items.get("p1").unwrap();
    assert!(Arc::ptr_eq(
        items.parent_of(p1).unwrap(),
        items.get("d1").unwrap()
    ));

    client.items().await.unwrap();
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_async_failure_is_not_memoized() {
    let transport = ScriptedTransport::new(vec![Err(ClientError::MalformedResponse(
        "truncated".into(),
    ))]);
    let mut client = AsyncNotionClient::with_transport(test_config(), &transport);

    assert!(client.items().await.is_err());
    assert!(client.cached_items().is_none());

    for reply in two_page_search() {
        transport.push(reply);
    }
    assert_eq!(client.items().await.unwrap().len(), 3);
}
