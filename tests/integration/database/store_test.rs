use metablog::backend::store::{BlogStore, CommentStore, DocumentStore, StoreError, WishlistStore};
use metablog::shared::{BlogFilter, BlogUpdate, NewBlogPost, NewComment, NewWishlistEntry};
use pretty_assertions::assert_eq;
use serial_test::serial;

use crate::common::database::TestDatabase;

fn new_post(title: &str, category: &str, description: &str) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        category: category.to_string(),
        short_description: None,
        long_description: description.to_string(),
        image: None,
        email: None,
        owner_name: None,
        owner_photo: None,
    }
}

fn new_entry(blog_id: i64, email: &str) -> NewWishlistEntry {
    NewWishlistEntry {
        blog_id,
        email: email.to_string(),
        title: None,
        category: None,
        short_description: None,
        image: None,
    }
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_ping() {
    let db = TestDatabase::new().await;
    assert!(db.store().ping().await.is_ok());
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_tables_exist() {
    let db = TestDatabase::new().await;
    for table in ["blogs", "wishlist", "comments"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(db.pool())
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_blog_filters_and_orderings() {
    let db = TestDatabase::new().await;
    let store = db.store();

    store.insert_blog("a@x.com", &new_post("Rust 100%", "Tech", "aaaa")).await.unwrap();
    store.insert_blog("a@x.com", &new_post("Rust tips", "tech", "aa")).await.unwrap();
    store.insert_blog("b@x.com", &new_post("Travel", "Travel", "aaa")).await.unwrap();

    let filter = BlogFilter {
        search: None,
        category: Some("tech".to_string()),
    };
    assert_eq!(store.find_blogs(&filter).await.unwrap().len(), 2);

    let filter = BlogFilter {
        search: Some("100%".to_string()),
        category: None,
    };
    let found = store.find_blogs(&filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Rust 100%");

    let recent: Vec<String> = store
        .recent_blogs(2)
        .await
        .unwrap()
        .into_iter()
        .map(|post| post.title)
        .collect();
    assert_eq!(recent, vec!["Travel", "Rust tips"]);

    let featured: Vec<String> = store
        .featured_blogs(10)
        .await
        .unwrap()
        .into_iter()
        .map(|post| post.title)
        .collect();
    assert_eq!(featured, vec!["Rust 100%", "Travel", "Rust tips"]);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_update_and_delete_are_owner_scoped() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let id = store
        .insert_blog("a@x.com", &new_post("Old", "Tech", "Body"))
        .await
        .unwrap()
        .inserted_id;

    let update = BlogUpdate {
        title: Some("New".to_string()),
        ..Default::default()
    };
    let ack = store.update_blog(id, "b@x.com", &update).await.unwrap();
    assert_eq!((ack.matched_count, ack.modified_count), (0, 0));

    let ack = store.update_blog(id, "a@x.com", &update).await.unwrap();
    assert_eq!((ack.matched_count, ack.modified_count), (1, 1));

    let ack = store.update_blog(id, "a@x.com", &update).await.unwrap();
    assert_eq!((ack.matched_count, ack.modified_count), (1, 0));

    assert_eq!(store.delete_blog(id, "b@x.com").await.unwrap().deleted_count, 0);
    assert_eq!(store.delete_blog(id, "a@x.com").await.unwrap().deleted_count, 1);
    assert!(store.find_blog(id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_wishlist_unique_per_owner_and_post() {
    let db = TestDatabase::new().await;
    let store = db.store();

    store.insert_wishlist(&new_entry(1, "a@x.com")).await.unwrap();
    let result = store.insert_wishlist(&new_entry(1, "a@x.com")).await;
    assert!(matches!(result, Err(StoreError::Duplicate { .. })));

    store.insert_wishlist(&new_entry(1, "b@x.com")).await.unwrap();
    assert_eq!(store.find_wishlist("a@x.com").await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_comments_by_post() {
    let db = TestDatabase::new().await;
    let store = db.store();

    for (blog_id, text) in [(1, "one"), (2, "two"), (1, "three")] {
        store
            .insert_comment(&NewComment {
                blog_id,
                comment: text.to_string(),
                name: None,
                email: None,
                photo: None,
            })
            .await
            .unwrap();
    }

    let texts: Vec<String> = store
        .find_comments(1)
        .await
        .unwrap()
        .into_iter()
        .map(|comment| comment.comment)
        .collect();
    assert_eq!(texts, vec!["one", "three"]);
}
