//! End-to-end tests from the directory API to alias lines.
//!
//! A mock server plays the People API; the authorized client carries a
//! fixed token so no authorization server is involved.

#![allow(clippy::unwrap_used)]

use gwcontacts_core::{AliasWriter, DirectoryClient, Error, normalize_all};
use gwcontacts_oauth::{AuthorizedClient, OAuthClient, Provider, Token};
use mockito::{Matcher, Server};

const LIST_PATH: &str = "/v1/people:listDirectoryPeople";

fn directory_for(server: &Server) -> DirectoryClient {
    let provider = Provider::new(
        format!("{}/o/oauth2/auth", server.url()),
        format!("{}/token", server.url()),
    )
    .unwrap();
    let oauth = OAuthClient::new("cid", provider);
    let client = AuthorizedClient::new(oauth, Token::new("ya29.test", "Bearer"));
    DirectoryClient::with_base_url(client, &server.url()).unwrap()
}

#[tokio::test]
async fn directory_to_aliases() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", LIST_PATH)
        .match_header("authorization", "Bearer ya29.test")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageSize".into(), "1000".into()),
            Matcher::UrlEncoded(
                "mergeSources".into(),
                "DIRECTORY_MERGE_SOURCE_TYPE_CONTACT".into(),
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "people": [
                    {
                        "resourceName": "people/1",
                        "names": [{"displayName": "Jon"}, {"displayName": "Jonathan"}],
                        "emailAddresses": [{"value": "jonathan@co.com"}]
                    },
                    {
                        "resourceName": "people/2",
                        "emailAddresses": [{"value": "a.b@co.com"}, {"value": "c@co.com"}]
                    },
                    {
                        "resourceName": "people/3",
                        "names": [{"displayName": "Room 101"}],
                        "emailAddresses": [{"value": ""}]
                    }
                ]
            }"#,
        )
        .create_async()
        .await;

    let people = directory_for(&server).list_directory_people().await.unwrap();
    mock.assert_async().await;

    let contacts = normalize_all(&people);
    assert_eq!(contacts.len(), 3);

    let mut writer = AliasWriter::new(Vec::new());
    assert_eq!(writer.write_contacts(&contacts).unwrap(), 3);
    let out = String::from_utf8(writer.finish().unwrap()).unwrap();

    assert_eq!(
        out,
        "alias jonathan Jonathan <jonathan@co.com>\n\
         alias a.b A B <a.b@co.com>\n\
         alias c C <c@co.com>\n"
    );
}

#[tokio::test]
async fn truncated_directory_returns_first_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"people": [{"emailAddresses": [{"value": "x@co.com"}]}], "nextPageToken": "p2"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let people = directory_for(&server).list_directory_people().await.unwrap();

    mock.assert_async().await;
    assert_eq!(people.len(), 1);
}

#[tokio::test]
async fn api_error_is_reported() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Any)
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}}"#,
        )
        .create_async()
        .await;

    let err = directory_for(&server)
        .list_directory_people()
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "The caller does not have permission");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let err = directory_for(&server)
        .list_directory_people()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn proxy_error_page_is_reported_on_one_line() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", LIST_PATH)
        .match_query(Matcher::Any)
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body(
            "<html>\n<head><title>502 Bad Gateway</title></head>\n<body>\n<center>nginx</center>\n</body>\n</html>\n",
        )
        .create_async()
        .await;

    let err = directory_for(&server)
        .list_directory_people()
        .await
        .unwrap_err();

    match &err {
        Error::Api { status, message } => {
            assert_eq!(*status, 502);
            assert!(message.starts_with("<html> <head><title>502 Bad Gateway"));
            assert!(!message.contains('\n'));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!err.to_string().contains('\n'));
}
