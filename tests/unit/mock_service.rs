// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Behaviour of the mock service through the public `Service` trait

#[cfg(test)]
mod tests {
    use a_system::prelude::*;

    const KEY: &str = "123";

    #[tokio::test]
    async fn test_auth_always_returns_configured_key() {
        let service = MockService::new(KEY);
        for name in ["", "alice", "名前"] {
            let key = service.auth(name, Timestamp::now()).await.unwrap();
            assert_eq!(key, KEY);
        }
    }

    #[tokio::test]
    async fn test_authenticated_calls_fail_exactly_on_mismatch() {
        let service = MockService::new(KEY);

        for token in ["", "12", "1234", "abc"] {
            assert_eq!(service.get_server_time(token).await, Err(ServiceError::InvalidKey));
            assert_eq!(
                service.post_image(token, &Image::default()).await,
                Err(ServiceError::InvalidKey)
            );
            assert_eq!(
                service.get_image(token, ImageId(1)).await,
                Err(ServiceError::InvalidKey)
            );
        }

        assert_eq!(service.get_server_time(KEY).await, Ok(Timestamp::ZERO));
        assert!(service.post_image(KEY, &Image::default()).await.is_ok());
        assert!(service.get_image(KEY, ImageId(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_key_is_checked_before_image_lookup() {
        let service = MockService::new(KEY);
        assert_eq!(
            service.get_image("wrong", ImageId::NONE).await,
            Err(ServiceError::InvalidKey)
        );
    }

    #[tokio::test]
    async fn test_post_image_ids_are_sequential() {
        let service = MockService::new(KEY);
        let mut ids = Vec::new();
        for n in 0..10u8 {
            let image = Image::new(vec![n; usize::from(n)]);
            ids.push(service.post_image(KEY, &image).await.unwrap());
        }
        assert_eq!(ids, (1..=10).map(ImageId).collect::<Vec<_>>());
        assert_eq!(service.posted().await, 10);
    }

    #[tokio::test]
    async fn test_get_image_reserved_id_not_found() {
        let service = MockService::new(KEY);
        let err = service.get_image(KEY, ImageId::NONE).await.unwrap_err();
        assert_eq!(err, ServiceError::ImageNotFound { id: ImageId::NONE });
        assert_eq!(err.to_string(), "image not found");
        assert!(!err.is_auth());
    }

    #[tokio::test]
    async fn test_get_image_any_nonzero_id_returns_empty_image() {
        let service = MockService::new(KEY);
        // Nothing has been uploaded; lookups still succeed.
        for id in [1, 2, 999, u64::MAX] {
            let image = service.get_image(KEY, ImageId(id)).await.unwrap();
            assert_eq!(image, Image::default());
        }
    }

    #[tokio::test]
    async fn test_reset_revokes_key() {
        let service = MockService::new(KEY);
        service.reset().await;

        let err = service.get_server_time(KEY).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid service key");
        assert!(err.is_auth());
        assert!(service.post_image(KEY, &Image::default()).await.is_err());
        assert!(service.get_image(KEY, ImageId(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_token_accepted_after_reset() {
        let service = MockService::new(KEY);
        service.reset().await;

        // Auth hands out the now-empty key, and it matches the cleared secret.
        let key = service.auth("alice", Timestamp::ZERO).await.unwrap();
        assert_eq!(key, "");
        assert_eq!(service.get_server_time(&key).await, Ok(Timestamp::ZERO));
        assert_eq!(service.post_image("", &Image::default()).await, Ok(ImageId(1)));
    }

    #[tokio::test]
    async fn test_empty_key_accepts_matching_token() {
        let service = MockService::new("");
        assert_eq!(service.get_server_time("").await, Ok(Timestamp::ZERO));
        assert_eq!(service.get_server_time("123").await, Err(ServiceError::InvalidKey));
    }

    #[tokio::test]
    async fn test_noop_and_hello_work_after_reset() {
        let service = MockService::new(KEY);
        service.reset().await;
        service.noop().await;
        assert_eq!(service.hello("bob").await, Ok("Good to go bob".to_string()));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let service: Arc<dyn Service> = Arc::new(MockService::new(KEY));
        assert_eq!(service.post_image(KEY, &Image::default()).await, Ok(ImageId(1)));
    }
}
