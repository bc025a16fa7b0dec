use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use futures::future::BoxFuture;
use ldap_rs_demos::{
    error::{Error, Result},
    web::router,
    Attribute, Directory, Entry, Scope, SearchQuery, WebConfig,
};
use tower::ServiceExt;

#[derive(Default)]
struct FakeDirectory {
    entries: Vec<Entry>,
    fail: bool,
    queries: Mutex<Vec<SearchQuery>>,
}

impl Directory for FakeDirectory {
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BoxFuture<'a, Result<Vec<Entry>>> {
        Box::pin(async move {
            self.queries.lock().unwrap().push(query.clone());
            if self.fail {
                Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "Connection refused",
                )))
            } else {
                Ok(self.entries.clone())
            }
        })
    }
}

fn app(directory: Arc<FakeDirectory>) -> Router {
    router(directory, &WebConfig::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn root_without_params_uses_defaults() {
    let directory = Arc::new(FakeDirectory::default());
    let (status, content_type, body) = get(app(directory.clone()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("no results found"));

    let queries = directory.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].get_filter(), "(objectClass=*)");
    assert_eq!(queries[0].get_attributes(), ["*"]);
    assert_eq!(queries[0].get_base_dn(), "dc=example,dc=com");
    assert_eq!(queries[0].get_scope(), Scope::Subtree);
}

#[tokio::test]
async fn empty_params_use_defaults() {
    let directory = Arc::new(FakeDirectory::default());
    let (status, _, _) = get(app(directory.clone()), "/?filter=&fields=&base-dn=").await;

    assert_eq!(status, StatusCode::OK);
    let queries = directory.queries.lock().unwrap();
    assert_eq!(queries[0].get_filter(), "(objectClass=*)");
    assert_eq!(queries[0].get_attributes(), ["*"]);
    assert_eq!(queries[0].get_base_dn(), "dc=example,dc=com");
}

#[tokio::test]
async fn params_are_passed_to_search() {
    let directory = Arc::new(FakeDirectory::default());
    let uri = "/?filter=%28objectClass%3Dperson%29&fields=cn%2C+mail&base-dn=ou%3Dpeople%2Cdc%3Dexample%2Cdc%3Dcom";
    let (status, _, body) = get(app(directory.clone()), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="(objectClass=person)"/>"#));
    assert!(body.contains(r#"value="cn, mail"/>"#));

    let queries = directory.queries.lock().unwrap();
    assert_eq!(queries[0].get_filter(), "(objectClass=person)");
    assert_eq!(queries[0].get_attributes(), ["cn", "mail"]);
    assert_eq!(queries[0].get_base_dn(), "ou=people,dc=example,dc=com");
}

#[tokio::test]
async fn entries_are_rendered() {
    let directory = Arc::new(FakeDirectory {
        entries: vec![Entry::new(
            "cn=admins,dc=example,dc=com",
            vec![
                Attribute::text("cn", ["admins"]),
                Attribute::text("roleOccupant", ["uid=alice,ou=people,dc=example,dc=com"]),
            ],
        )],
        ..Default::default()
    });
    let (status, _, body) = get(app(directory), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<caption>cn=admins,dc=example,dc=com</caption>"));
    assert!(body.contains(r#"javascript:search("(objectClass=*)", "*", "uid=alice,ou=people,dc=example,dc=com")"#));
    assert!(!body.contains("no results found"));
}

#[tokio::test]
async fn failed_search_is_bad_request() {
    let directory = Arc::new(FakeDirectory {
        fail: true,
        ..Default::default()
    });
    let (status, _, body) = get(app(directory), "/").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Connection refused");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let directory = Arc::new(FakeDirectory::default());
    let (status, _, body) = get(app(directory.clone()), "/favicon.ico").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found");
    assert!(directory.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_param_uses_first_value() {
    let directory = Arc::new(FakeDirectory::default());
    let (status, _, _) = get(app(directory.clone()), "/?filter=%28cn%3Da%29&filter=%28cn%3Db%29").await;

    assert_eq!(status, StatusCode::OK);
    let queries = directory.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].get_filter(), "(cn=a)");
}

#[tokio::test]
async fn malformed_filter_is_bad_request() {
    for uri in ["/?filter=%", "/?filter=%28cn%3Da"] {
        let directory = Arc::new(FakeDirectory::default());
        let (status, _, body) = get(app(directory.clone()), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(!body.is_empty(), "{uri}");
        assert!(directory.queries.lock().unwrap().is_empty(), "{uri}");
    }
}
