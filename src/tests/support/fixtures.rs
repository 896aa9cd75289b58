// src/tests/support/fixtures.rs

use chrono::{DateTime, Utc};

use crate::modules::content::application::domain::{
    BlogPost, Project, Service, Testimonial, ACTIVE_STATUS,
};

fn timestamp(rfc3339: &str) -> Option<DateTime<Utc>> {
    Some(
        DateTime::parse_from_rfc3339(rfc3339)
            .expect("fixture timestamp")
            .with_timezone(&Utc),
    )
}

pub fn service(id: &str, title: &str, priority: i64) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(format!("{title} description")),
        icon: None,
        status: Some(ACTIVE_STATUS.to_string()),
        priority_order: Some(priority),
    }
}

pub fn project(id: &str, category: &str, priority: i64, created_at: &str) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {id}"),
        category: Some(category.to_string()),
        status: Some(ACTIVE_STATUS.to_string()),
        priority_order: Some(priority),
        created_at: timestamp(created_at),
        ..Project::default()
    }
}

pub fn testimonial(id: &str, rating: u8, created_at: &str, approved: bool) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        name: format!("Client {id}"),
        message: "Delivered on time.".to_string(),
        rating: Some(rating),
        is_approved: approved,
        created_at: timestamp(created_at),
        ..Testimonial::default()
    }
}

pub fn blog_post(id: &str, category: &str, created_at: &str, published: bool) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: format!("Post {id}"),
        slug: format!("post-{id}"),
        category: Some(category.to_string()),
        published,
        created_at: timestamp(created_at),
        ..BlogPost::default()
    }
}
