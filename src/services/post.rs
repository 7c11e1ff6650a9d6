use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::PostEntity;
use crate::domain::slug::slugify;
use crate::error::AppError;
use crate::repository::post::{PostRepository, NO_EXCLUDED_ID};

#[async_trait]
pub trait PostService: Send + Sync {
    async fn create(&self, post: PostEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<PostEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<PostEntity, AppError>;
    async fn fetch_by_slug(&self, slug: &str) -> Result<PostEntity, AppError>;
    async fn edit_by_id(&self, post: PostEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct PostServiceImpl {
    repo: Arc<dyn PostRepository>,
}

impl PostServiceImpl {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Slug policy shared by create and edit: derive from the title when the
    /// caller supplied none, then require uniqueness among live posts
    /// (excluding the row being written). Not atomic with the following
    /// write; two concurrent creates with the same slug can both pass.
    async fn resolve_slug(&self, post: &mut PostEntity, exclude_id: i64) -> Result<(), AppError> {
        if post.slug.is_empty() {
            post.slug = slugify(&post.title);
        }

        if !self.repo.is_slug_unique(&post.slug, exclude_id).await? {
            tracing::error!("[SERVICE] slug '{}' already exists", post.slug);
            return Err(AppError::SlugConflict(post.slug.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostService for PostServiceImpl {
    async fn create(&self, mut post: PostEntity) -> Result<(), AppError> {
        self.resolve_slug(&mut post, NO_EXCLUDED_ID).await?;
        self.repo.create(post).await
    }

    async fn fetch_all(&self) -> Result<Vec<PostEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<PostEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn fetch_by_slug(&self, slug: &str) -> Result<PostEntity, AppError> {
        self.repo.fetch_by_slug(slug).await
    }

    async fn edit_by_id(&self, mut post: PostEntity) -> Result<(), AppError> {
        let exclude = post.id;
        self.resolve_slug(&mut post, exclude).await?;
        self.repo.update(post).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory stand-in for the Postgres adapter, honoring the same
    /// contract: tombstoned rows are invisible, updates load-then-write.
    #[derive(Default)]
    struct MemPostRepo {
        rows: Mutex<Vec<(PostEntity, bool)>>, // (post, deleted)
    }

    impl MemPostRepo {
        fn with(posts: Vec<PostEntity>) -> Self {
            Self {
                rows: Mutex::new(posts.into_iter().map(|p| (p, false)).collect()),
            }
        }
    }

    #[async_trait]
    impl PostRepository for MemPostRepo {
        async fn create(&self, mut post: PostEntity) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            post.id = rows.len() as i64 + 1;
            rows.push((post, false));
            Ok(())
        }

        async fn fetch_all(&self) -> Result<Vec<PostEntity>, AppError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .filter(|(_, deleted)| !deleted)
                .map(|(p, _)| p.clone())
                .collect())
        }

        async fn fetch_by_id(&self, id: i64) -> Result<PostEntity, AppError> {
            let rows = self.rows.lock().unwrap();
            rows.iter()
                .find(|(p, deleted)| p.id == id && !deleted)
                .map(|(p, _)| p.clone())
                .ok_or(AppError::NotFound("post"))
        }

        async fn fetch_by_slug(&self, slug: &str) -> Result<PostEntity, AppError> {
            let rows = self.rows.lock().unwrap();
            rows.iter()
                .find(|(p, deleted)| p.slug == slug && !deleted)
                .map(|(p, _)| p.clone())
                .ok_or(AppError::NotFound("post"))
        }

        async fn update(&self, post: PostEntity) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|(p, deleted)| p.id == post.id && !deleted)
                .ok_or(AppError::NotFound("post"))?;
            slot.0 = post;
            Ok(())
        }

        async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|(p, deleted)| p.id == id && !deleted)
                .ok_or(AppError::NotFound("post"))?;
            slot.1 = true;
            Ok(())
        }

        async fn is_slug_unique(&self, slug: &str, exclude_id: i64) -> Result<bool, AppError> {
            let rows = self.rows.lock().unwrap();
            let count = rows
                .iter()
                .filter(|(p, deleted)| p.slug == slug && p.id != exclude_id && !deleted)
                .count();
            Ok(count == 0)
        }
    }

    fn sample_post(id: i64, title: &str, slug: &str) -> PostEntity {
        PostEntity {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
            author: "A".to_string(),
            featured_image: "x".to_string(),
            content: "c".to_string(),
            published_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn create_derives_slug_from_title_when_empty() {
        let repo = Arc::new(MemPostRepo::default());
        let service = PostServiceImpl::new(repo.clone());

        service.create(sample_post(0, "Hello World", "")).await.unwrap();

        let stored = service.fetch_by_slug("hello-world").await.unwrap();
        assert_eq!(stored.title, "Hello World");
        assert_eq!(stored.slug, "hello-world");
    }

    #[tokio::test]
    async fn create_with_colliding_slug_fails_before_write() {
        let repo = Arc::new(MemPostRepo::with(vec![sample_post(1, "Hello World", "hello-world")]));
        let service = PostServiceImpl::new(repo.clone());

        let err = service
            .create(sample_post(0, "Another Take", "hello-world"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SlugConflict(ref s) if s == "hello-world"));

        // No second row was written.
        assert_eq!(service.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn edit_keeping_own_slug_is_self_excluded() {
        let repo = Arc::new(MemPostRepo::with(vec![sample_post(1, "Hello World", "hello-world")]));
        let service = PostServiceImpl::new(repo);

        let mut edited = sample_post(1, "Hello World Revised", "hello-world");
        edited.content = "updated".to_string();
        service.edit_by_id(edited).await.unwrap();

        let stored = service.fetch_by_id(1).await.unwrap();
        assert_eq!(stored.content, "updated");
        assert_eq!(stored.slug, "hello-world");
    }

    #[tokio::test]
    async fn edit_onto_another_posts_slug_conflicts() {
        let repo = Arc::new(MemPostRepo::with(vec![
            sample_post(1, "First", "first"),
            sample_post(2, "Second", "second"),
        ]));
        let service = PostServiceImpl::new(repo);

        let err = service
            .edit_by_id(sample_post(2, "Second", "first"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SlugConflict(_)));
    }

    #[tokio::test]
    async fn delete_then_fetch_is_not_found() {
        let repo = Arc::new(MemPostRepo::with(vec![sample_post(1, "Hello", "hello")]));
        let service = PostServiceImpl::new(repo);

        service.delete_by_id(1).await.unwrap();
        assert!(matches!(
            service.fetch_by_id(1).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        // Deleting again also reports NotFound on the preceding load.
        assert!(matches!(
            service.delete_by_id(1).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn edit_of_absent_id_is_not_found() {
        let repo = Arc::new(MemPostRepo::default());
        let service = PostServiceImpl::new(repo);

        let err = service.edit_by_id(sample_post(5, "Ghost", "ghost")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn deleted_posts_free_their_slug() {
        let repo = Arc::new(MemPostRepo::with(vec![sample_post(1, "Hello World", "hello-world")]));
        let service = PostServiceImpl::new(repo);

        service.delete_by_id(1).await.unwrap();
        service.create(sample_post(0, "Hello World", "")).await.unwrap();

        let stored = service.fetch_by_slug("hello-world").await.unwrap();
        assert_eq!(stored.title, "Hello World");
    }
}
