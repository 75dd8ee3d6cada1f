//! Reviews and their comments
//!
//! Storage order is insertion order. The feed shows reviews newest first, so
//! positions coming from the feed are display positions and get mapped back
//! to storage indices here.

use crate::photo;
use crate::site::{GuardedAction, Site, SiteError};
use crate::storage::Collection;
use crate::types::{Comment, Review};

/// Raw review form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewForm {
    pub drink_name: String,
    pub description: String,
    /// URL, bundled asset path, local file path, or empty for the default image
    pub photo: String,
}

/// Storage index for a position in the newest-first feed.
pub fn storage_index(len: usize, display_index: usize) -> Option<usize> {
    (display_index < len).then(|| len - 1 - display_index)
}

impl Site {
    /// All reviews in storage order, normalized in memory. Never writes.
    pub fn reviews(&self) -> Vec<Review> {
        let mut reviews: Vec<Review> = self.store.load(Collection::Reviews);
        for review in &mut reviews {
            review.normalize();
        }
        reviews
    }

    /// Bring stored reviews up to the current schema, writing only if a
    /// record changed. Returns whether anything was written.
    pub fn normalize_reviews(&self) -> Result<bool, SiteError> {
        let mut reviews: Vec<Review> = self.store.load(Collection::Reviews);
        let mut changed = false;
        for review in &mut reviews {
            changed |= review.normalize();
        }
        if changed {
            self.store.save(Collection::Reviews, &reviews)?;
            tracing::info!("Normalized {} stored review(s)", reviews.len());
        }
        Ok(changed)
    }

    /// Store the example review when the collection has never been written.
    pub fn seed_reviews(&self) -> Result<(), SiteError> {
        if self.store.contains(Collection::Reviews) {
            return Ok(());
        }
        let example = Review::new(
            "Sunset Bliss",
            "Cóctel tropical con un toque cítrico, dulce y refrescante.",
            "images/bebida1.jpg",
            "Claudia",
        );
        self.store.save(Collection::Reviews, &[example])?;
        tracing::info!("Seeded example review");
        Ok(())
    }

    /// Publish a review as the session user.
    ///
    /// The photo is resolved (and a local file read) before the collection is
    /// loaded, so each publish performs exactly one write.
    pub async fn publish_review(&self, form: &ReviewForm) -> Result<Review, SiteError> {
        let author = self
            .display_name()
            .ok_or(SiteError::LoginRequired(GuardedAction::PublishReview))?;

        let drink_name = form.drink_name.trim();
        let description = form.description.trim();
        if drink_name.is_empty() || description.is_empty() {
            return Err(SiteError::MissingReviewFields);
        }

        let photo = photo::resolve(&form.photo).await?;

        let review = Review::new(drink_name, description, photo, author);
        let mut reviews = self.reviews();
        reviews.push(review.clone());
        self.store.save(Collection::Reviews, &reviews)?;

        tracing::info!("Published review '{}' by {}", review.drink_name, review.author);
        Ok(review)
    }

    /// Append a comment to the review at `storage_index`.
    pub fn add_comment(&self, storage_index: usize, text: &str) -> Result<Comment, SiteError> {
        let author = self
            .display_name()
            .ok_or(SiteError::LoginRequired(GuardedAction::Comment))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(SiteError::EmptyComment);
        }

        let mut reviews = self.reviews();
        let review = reviews
            .get_mut(storage_index)
            .ok_or(SiteError::ReviewNotFound(storage_index))?;
        let comment = Comment::new(author, text);
        review.comments.push(comment.clone());
        self.store.save(Collection::Reviews, &reviews)?;

        tracing::info!("Comment added to review #{}", storage_index);
        Ok(comment)
    }

    /// Delete the review at a position in the newest-first feed.
    pub fn delete_review(&self, display_index: usize) -> Result<Review, SiteError> {
        let mut reviews = self.reviews();
        let index = storage_index(reviews.len(), display_index)
            .ok_or(SiteError::ReviewNotFound(display_index))?;
        let removed = reviews.remove(index);
        self.store.save(Collection::Reviews, &reviews)?;

        tracing::info!("Deleted review '{}'", removed.drink_name);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::credentials::testing::TestHasher;
    use crate::site::{test_site, Registration};
    use crate::storage::{FileBackend, RecordStore};
    use std::sync::Arc;

    fn logged_in_site() -> Site {
        let site = test_site();
        site.register(&Registration {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "555".into(),
            age: "20".into(),
            password: "p".into(),
        })
        .unwrap();
        site
    }

    fn form(name: &str) -> ReviewForm {
        ReviewForm {
            drink_name: name.into(),
            description: format!("{} description", name),
            photo: String::new(),
        }
    }

    #[test]
    fn test_storage_index_mapping() {
        assert_eq!(storage_index(3, 0), Some(2));
        assert_eq!(storage_index(3, 2), Some(0));
        assert_eq!(storage_index(3, 3), None);
        assert_eq!(storage_index(0, 0), None);
    }

    #[tokio::test]
    async fn test_publish_requires_login() {
        let site = test_site();
        let result = site.publish_review(&form("A")).await;
        assert!(matches!(
            result,
            Err(SiteError::LoginRequired(GuardedAction::PublishReview))
        ));
        assert!(site.reviews().is_empty());
    }

    #[tokio::test]
    async fn test_publish_requires_name_and_description() {
        let site = logged_in_site();
        let mut incomplete = form("A");
        incomplete.description = "  ".into();
        assert!(matches!(
            site.publish_review(&incomplete).await,
            Err(SiteError::MissingReviewFields)
        ));
        assert!(site.reviews().is_empty());
    }

    #[tokio::test]
    async fn test_publish_uses_author_and_default_photo() {
        let site = logged_in_site();
        let review = site.publish_review(&form("Negroni")).await.unwrap();
        assert_eq!(review.author, "Ana");
        assert_eq!(review.photo, photo::DEFAULT_PHOTO);
        assert!(review.comments.is_empty());
        assert_eq!(site.reviews(), vec![review]);
    }

    #[tokio::test]
    async fn test_delete_newest_removes_last_appended() {
        let site = logged_in_site();
        site.publish_review(&form("A")).await.unwrap();
        site.publish_review(&form("B")).await.unwrap();
        site.publish_review(&form("C")).await.unwrap();

        let removed = site.delete_review(0).unwrap();
        assert_eq!(removed.drink_name, "C");

        let names: Vec<_> = site.reviews().into_iter().map(|r| r.drink_name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_delete_out_of_range_leaves_storage() {
        let site = logged_in_site();
        site.publish_review(&form("A")).await.unwrap();
        assert!(matches!(site.delete_review(1), Err(SiteError::ReviewNotFound(1))));
        assert_eq!(site.reviews().len(), 1);
    }

    #[tokio::test]
    async fn test_comments_append_in_order() {
        let site = logged_in_site();
        site.publish_review(&form("A")).await.unwrap();

        site.add_comment(0, "X").unwrap();
        site.add_comment(0, "  Y  ").unwrap();

        let reviews = site.reviews();
        let texts: Vec<_> = reviews[0].comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["X", "Y"]);
        assert_eq!(reviews[0].comments[0].author, "Ana");
    }

    #[tokio::test]
    async fn test_comment_validation() {
        let site = logged_in_site();
        site.publish_review(&form("A")).await.unwrap();

        assert!(matches!(site.add_comment(0, "   "), Err(SiteError::EmptyComment)));
        assert!(matches!(site.add_comment(5, "hola"), Err(SiteError::ReviewNotFound(5))));

        site.logout().unwrap();
        assert!(matches!(
            site.add_comment(0, "hola"),
            Err(SiteError::LoginRequired(GuardedAction::Comment))
        ));
        assert!(site.reviews()[0].comments.is_empty());
    }

    #[test]
    fn test_seed_only_when_absent() {
        let site = test_site();
        site.seed_reviews().unwrap();
        let seeded = site.reviews();
        assert_eq!(seeded.len(), 1);
        assert_eq!(seeded[0].drink_name, "Sunset Bliss");
        assert_eq!(seeded[0].author, "Claudia");

        // An emptied collection stays empty
        site.delete_review(0).unwrap();
        site.seed_reviews().unwrap();
        assert!(site.reviews().is_empty());
    }

    #[test]
    fn test_legacy_reviews_normalized_once() {
        let site = test_site();
        let legacy = r#"[{"nombreTrago":"Old","descripcion":"d","foto":"f","autor":"a","fecha":"x"}]"#;
        site.store().set_raw("resenas", legacy).unwrap();

        // Reading leaves storage alone
        let read = site.reviews();
        assert!(!read[0].id.is_nil());
        assert!(read[0].comments.is_empty());
        assert_eq!(site.store().get_raw("resenas").as_deref(), Some(legacy));

        assert!(site.normalize_reviews().unwrap());
        let first = site.reviews();
        let second = site.reviews();
        assert_eq!(first[0].id, second[0].id);

        // Already current: nothing to write
        assert!(!site.normalize_reviews().unwrap());
        assert_eq!(site.reviews()[0].id, first[0].id);
    }

    #[test]
    fn test_seed_keeps_unreadable_reviews() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resenas.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let site = Site::new(
            RecordStore::new(Arc::new(FileBackend::new(dir.path()))),
            Arc::new(TestHasher),
        );

        site.seed_reviews().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00]);
    }
}
