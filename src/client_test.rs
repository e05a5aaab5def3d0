//! Tests for client.rs against a real kube::Client backed by the mock service

#[cfg(test)]
mod tests {
    use crate::application::Application;
    use crate::application_test::guestbook;
    use crate::client::*;
    use crate::detail::{get_application_detail, DetailAssembler};
    use crate::error::{Error, ErrorKind};
    use crate::mock_service::MockService;
    use crate::view::ApplicationDetail;
    use http::StatusCode;

    fn guestbook_json() -> serde_json::Value {
        serde_json::to_value(guestbook()).unwrap()
    }

    #[tokio::test]
    async fn test_get_application() {
        let service = MockService::new().with_application("default", "guestbook", guestbook_json());
        let client = KubeClient::new(service.clone().into_client());

        let app: Application = client.get("default", "guestbook").await.unwrap();

        assert_eq!(app, guestbook());
        assert_eq!(
            service.requests(),
            vec!["/apis/app.k8s.io/v1beta1/namespaces/default/applications/guestbook"]
        );
    }

    #[tokio::test]
    async fn test_get_missing_application() {
        let client = KubeClient::new(MockService::new().into_client());

        let result: crate::Result<Application> = client.get("default", "missing").await;

        match result {
            Err(Error::NotFound {
                kind,
                name,
                namespace,
            }) => {
                assert_eq!(kind, "Application");
                assert_eq!(name, "missing");
                assert_eq!(namespace, "default");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_status_errors() {
        let cases = [
            (StatusCode::UNAUTHORIZED, ErrorKind::Unauthorized),
            (StatusCode::FORBIDDEN, ErrorKind::Forbidden),
            (StatusCode::SERVICE_UNAVAILABLE, ErrorKind::Unavailable),
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Internal),
        ];

        for (status, expected) in cases {
            let service = MockService::new().with_application_error("default", "guestbook", status);
            let client = KubeClient::new(service.into_client());

            let result: crate::Result<Application> = client.get("default", "guestbook").await;

            assert_eq!(result.unwrap_err().kind(), expected, "{}", status);
        }
    }

    #[tokio::test]
    async fn test_list_namespaced_and_all() {
        let mut other = guestbook();
        other.metadata.name = Some("blog".to_string());
        other.metadata.namespace = Some("staging".to_string());
        let service = MockService::new()
            .with_application_list(Some("default"), vec![guestbook_json()])
            .with_application_list(
                None,
                vec![guestbook_json(), serde_json::to_value(&other).unwrap()],
            );
        let client = KubeClient::new(service.clone().into_client());

        let namespaced: Vec<Application> = client.list(Some("default")).await.unwrap();
        let all: Vec<Application> = client.list(None).await.unwrap();

        assert_eq!(namespaced.len(), 1);
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].metadata.name.as_deref(), Some("blog"));
        assert_eq!(
            service.requests(),
            vec![
                "/apis/app.k8s.io/v1beta1/namespaces/default/applications",
                "/apis/app.k8s.io/v1beta1/applications",
            ]
        );
    }

    #[tokio::test]
    async fn test_list_forbidden() {
        let service = MockService::new().with_application_list_error(Some("kube-system"), StatusCode::FORBIDDEN);
        let client = KubeClient::new(service.into_client());

        let result: crate::Result<Vec<Application>> = client.list(Some("kube-system")).await;

        assert!(matches!(result, Err(Error::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_detail_through_kube_client() {
        let service = MockService::new().with_application("default", "guestbook", guestbook_json());
        let client = KubeClient::from(service.into_client());

        let detail = get_application_detail(&client, "default", "guestbook")
            .await
            .unwrap();

        assert!(detail.errors.is_empty());
        assert_eq!(detail.selector.get("app").map(String::as_str), Some("guestbook"));
        assert_eq!(detail.component_group_kinds.len(), 1);
    }

    #[tokio::test]
    async fn test_detail_not_found_through_kube_client() {
        let client = KubeClient::new(MockService::new().into_client());

        let detail = get_application_detail(&client, "default", "guestbook")
            .await
            .unwrap();

        assert_eq!(detail.errors.len(), 1);
        assert_eq!(detail.errors[0].kind, ErrorKind::NotFound);
        assert_eq!(detail.object_meta.name, "guestbook");
    }

    #[tokio::test]
    async fn test_detail_forbidden_through_kube_client() {
        let service = MockService::new().with_application_error("default", "guestbook", StatusCode::FORBIDDEN);
        let client = KubeClient::new(service.into_client());

        let result: crate::Result<ApplicationDetail> = DetailAssembler::new()
            .get_detail(&client, "default", "guestbook")
            .await;

        assert!(matches!(result, Err(Error::Forbidden(_))));
    }
}
