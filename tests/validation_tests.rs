use chrono::Utc;
use portfolio_cms::{
    models::{CaseStudyInput, ContactForm, FieldError, SettingForm},
    services::{case_study_email, contact_email},
};

fn field_names(errors: &[FieldError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

#[test]
fn test_empty_case_study_lists_every_required_field() {
    let errors = CaseStudyInput::default().into_new().unwrap_err();
    assert_eq!(
        field_names(&errors),
        vec!["title", "slug", "excerpt", "description", "coverImage", "technologies"]
    );
    assert!(errors.iter().all(|e| e.message == "Required"));
}

#[test]
fn test_case_study_empty_strings_use_field_messages() {
    let input = CaseStudyInput {
        title: Some(String::new()),
        slug: Some("ok".to_string()),
        excerpt: Some("ok".to_string()),
        description: Some("ok".to_string()),
        cover_image: Some("https://x.io/a.png".to_string()),
        technologies: Some(vec!["Rust".to_string()]),
        ..Default::default()
    };

    let errors = input.into_new().unwrap_err();
    assert_eq!(errors, vec![FieldError::new("title", "Title is required")]);
}

#[test]
fn test_case_study_optional_fields_default() {
    let input = CaseStudyInput {
        title: Some("Title".to_string()),
        slug: Some("slug".to_string()),
        excerpt: Some("Excerpt".to_string()),
        description: Some("Description".to_string()),
        cover_image: Some("https://x.io/a.png".to_string()),
        technologies: Some(vec!["Rust".to_string()]),
        ..Default::default()
    };

    let new = input.into_new().unwrap();
    assert!(new.services.is_empty());
    assert!(new.images.is_empty());
    assert!(!new.featured);
    assert!(new.client_name.is_none());
}

#[test]
fn test_partial_update_only_checks_present_fields() {
    let changes = CaseStudyInput {
        featured: Some(true),
        ..Default::default()
    }
    .into_changes()
    .unwrap();
    assert_eq!(changes.featured, Some(true));
    assert!(changes.title.is_none());

    let errors = CaseStudyInput {
        slug: Some(String::new()),
        cover_image: Some("abc".to_string()),
        ..Default::default()
    }
    .into_changes()
    .unwrap_err();
    assert_eq!(field_names(&errors), vec!["slug", "coverImage"]);
}

#[test]
fn test_contact_form_whitespace_is_empty() {
    let form = ContactForm {
        name: Some("  ".to_string()),
        email: Some("jane@example.com".to_string()),
        subject: Some("\t".to_string()),
        message: Some("Hello".to_string()),
    };

    let errors = form.into_new().unwrap_err();
    assert_eq!(
        errors,
        vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("subject", "Subject is required"),
        ]
    );
}

#[test]
fn test_setting_form_defaults() {
    let setting = SettingForm {
        value: Some("1".to_string()),
        category: Some("general".to_string()),
        ..Default::default()
    }
    .into_new("items_per_page".to_string())
    .unwrap();

    assert_eq!(setting.key, "items_per_page");
    assert_eq!(setting.setting_type, "text");
    assert_eq!(setting.description, "");

    let errors = SettingForm {
        setting_type: Some(String::new()),
        ..Default::default()
    }
    .into_new("x".to_string())
    .unwrap_err();
    assert_eq!(field_names(&errors), vec!["category", "type"]);
}

#[test]
fn test_contact_email_escapes_html() {
    let message = portfolio_cms::models::ContactMessage {
        id: 1,
        name: "<script>alert(1)</script>".to_string(),
        email: "jane@example.com".to_string(),
        subject: "Rates & availability".to_string(),
        message: "Line one\nLine two".to_string(),
        read: false,
        created_at: Utc::now(),
    };

    let email = contact_email(&message);
    assert_eq!(email.subject, "New Contact Form Submission: Rates & availability");
    assert!(email.html.contains("&lt;script&gt;"));
    assert!(!email.html.contains("<script>"));
    assert!(email.html.contains("Rates &amp; availability"));
    assert!(email.html.contains("Line one<br>Line two"));
    assert!(email.text.contains("Line one\nLine two"));
}

#[test]
fn test_case_study_email_without_client() {
    let now = Utc::now();
    let case_study = portfolio_cms::models::CaseStudy {
        id: 7,
        title: "Checkout rebuild".to_string(),
        slug: "checkout-rebuild".to_string(),
        excerpt: "Excerpt".to_string(),
        description: "Description".to_string(),
        cover_image: "https://x.io/a.png".to_string(),
        client_name: None,
        client_industry: None,
        duration: None,
        services: vec![],
        challenge: None,
        solution: None,
        result: None,
        images: vec![],
        technologies: vec!["Rust".to_string()],
        testimonial: None,
        testimonial_author: None,
        testimonial_role: None,
        featured: false,
        website_url: None,
        publish_date: now,
        created_at: now,
        updated_at: now,
    };

    let email = case_study_email(&case_study);
    assert_eq!(email.subject, "New Case Study Added: Checkout rebuild");
    assert!(email.text.contains("Client: N/A"));
    assert!(email.text.contains("/case-studies/checkout-rebuild"));
}
