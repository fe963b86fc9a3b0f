//! Client-side form validation.
//!
//! The backend re-validates everything; these checks only keep obviously
//! bad submissions from leaving the browser and drive the inline error
//! messages under each field. One function per form, returning
//! [`FormErrors`] keyed by field name.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::forms::{
    AdminForm, Credentials, EditAdminForm, EventForm, NewsForm, PasswordChange, ProjectForm,
    PublicationForm, WebmasterForm,
};
use crate::models::PageLink;

/// Field name → message map produced by a failed validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    fn put(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\+234|0)[789][01]\d{8}$").expect("valid phone pattern"))
}

fn path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/[a-zA-Z0-9\-/#]*$").expect("valid path pattern"))
}

fn page_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").expect("valid page id pattern"))
}

fn icon_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^fa:[A-Za-z0-9]+$").expect("valid icon pattern"))
}

fn authors_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z\s]+,\s)*[A-Za-z\s]+$").expect("valid authors pattern")
    })
}

fn iso_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"))
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://\S+$").expect("valid url pattern"))
}

/// Passwords must be at least 6 characters, contain a digit and one of
/// `!@#$%^&*`, and use no characters outside letters, digits and that set.
fn password_ok(password: &str) -> bool {
    const SPECIALS: &str = "!@#$%^&*";
    password.len() >= 6
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIALS.contains(c))
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c))
}

const PASSWORD_MSG: &str =
    "*Must be at least 6 characters, include a number and a special character";

fn check_email(errors: &mut FormErrors, email: &str) {
    if email.trim().is_empty() {
        errors.put("email", "*Email is required");
    } else if !email_re().is_match(email.trim()) {
        errors.put("email", "*Invalid email format");
    }
}

fn check_phone(errors: &mut FormErrors, phone: &str) {
    let phone = phone.trim();
    if phone.len() < 10 {
        errors.put("phone", "*Phone number must be at least 10 digits");
    } else if !phone_re().is_match(phone) {
        errors.put("phone", "*Phone number must contain only digits");
    }
}

fn check_password_pair(errors: &mut FormErrors, password: &str, confirm: &str) {
    if password.len() < 6 {
        errors.put("password", "*Password must be at least 6 characters");
    } else if !password_ok(password) {
        errors.put("password", PASSWORD_MSG);
    }
    if confirm.is_empty() {
        errors.put("password_confirm", "*Please confirm your password");
    } else if password != confirm {
        errors.put("password_confirm", "*Passwords do not match");
    }
}

pub fn validate_webmaster(form: &WebmasterForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if form.firstname.trim().is_empty() {
        errors.put("firstname", "*First name is required");
    }
    if form.lastname.trim().is_empty() {
        errors.put("lastname", "*Last name is required");
    }
    if form.username.trim().is_empty() {
        errors.put("username", "*Username is required");
    }
    check_email(&mut errors, &form.email);
    check_phone(&mut errors, &form.phone);
    check_password_pair(&mut errors, &form.password, &form.password_confirm);
    errors.into_result()
}

pub fn validate_register_admin(form: &AdminForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if form.firstname.trim().is_empty() {
        errors.put("firstname", "*First name is required");
    }
    if form.lastname.trim().is_empty() {
        errors.put("lastname", "*Last name is required");
    }
    if form.role.trim().is_empty() {
        errors.put("role", "*Role is required");
    }
    check_email(&mut errors, &form.email);
    check_phone(&mut errors, &form.phone);
    check_password_pair(&mut errors, &form.password, &form.password_confirm);
    errors.into_result()
}

pub fn validate_edit_admin(form: &EditAdminForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if form.firstname.trim().is_empty() {
        errors.put("firstname", "*First name is required");
    }
    if form.lastname.trim().is_empty() {
        errors.put("lastname", "*Last name is required");
    }
    check_email(&mut errors, &form.email);
    check_phone(&mut errors, &form.phone);
    errors.into_result()
}

pub fn validate_login(form: &Credentials) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    check_email(&mut errors, &form.email);
    if form.password.is_empty() {
        errors.put("password", "*Password cannot be empty");
    }
    errors.into_result()
}

pub fn validate_change_password(form: &PasswordChange) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if form.current_password.is_empty() {
        errors.put("current_password", "*Password cannot be empty");
    }
    if form.new_password.len() < 6 {
        errors.put("new_password", "*Password must be at least 6 characters");
    } else if !password_ok(&form.new_password) {
        errors.put("new_password", PASSWORD_MSG);
    }
    if form.password_confirm.is_empty() {
        errors.put("password_confirm", "*Please confirm your password");
    } else if form.new_password != form.password_confirm {
        errors.put("password_confirm", "*Passwords do not match");
    }
    errors.into_result()
}

/// Validate a navigation link. Child links skip the slug and type checks;
/// both are derived from the parent when absent.
pub fn validate_page_link(link: &PageLink, is_child: bool) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if link.page_name.trim().is_empty() {
        errors.put("page_name", "Page name is required");
    }
    if link.path.trim().is_empty() {
        errors.put("path", "Path is required");
    } else if !path_re().is_match(link.path.trim()) {
        errors.put("path", "Path must start with '/'");
    }
    let icon = link.icon.trim();
    if !icon.is_empty() && !icon_re().is_match(icon) {
        errors.put("icon", "Icon must follow format 'fa:FaIconName'");
    }
    if !is_child {
        if link.page_id.trim().is_empty() {
            errors.put("page_id", "Page ID is required");
        } else if !page_id_re().is_match(link.page_id.trim()) {
            errors.put(
                "page_id",
                "Page ID must be lowercase letters, numbers, or hyphens",
            );
        }
        if link.page_type.trim().is_empty() {
            errors.put("page_type", "Page type is required");
        }
    }
    errors.into_result()
}

pub fn validate_project(form: &ProjectForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if form.title.trim().is_empty() {
        errors.put("title", "*Project Title cannot be empty");
    }
    if form.objective.trim().len() < 5 {
        errors.put(
            "objective",
            "*Please provide at least one clear project objective",
        );
    }
    errors.into_result()
}

pub fn validate_publication(form: &PublicationForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if form.title.trim().is_empty() {
        errors.put("title", "Title is required");
    }
    if form.summary.trim().is_empty() {
        errors.put("summary", "Summary is required");
    }
    if !authors_re().is_match(form.authors.trim()) {
        errors.put(
            "authors",
            "Authors must be comma-separated with a space after each comma",
        );
    }
    if !url_re().is_match(form.link.trim()) {
        errors.put("link", "Invalid URL");
    }
    if !iso_date_re().is_match(form.date.trim()) {
        errors.put("date", "Date must be included");
    }
    errors.into_result()
}

pub fn validate_news(form: &NewsForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if form.title.trim().len() < 3 {
        errors.put("title", "Title is required");
    }
    if form.date.trim().is_empty() {
        errors.put("date", "Date is required");
    }
    if !url_re().is_match(form.thumbnail.trim()) {
        errors.put("thumbnail", "Thumbnail must be a valid URL");
    }
    if form.brief.trim().len() < 10 {
        errors.put("brief", "Brief description is required");
    }
    if form.content.trim().len() < 20 {
        errors.put("content", "Content must be at least 20 characters");
    }
    errors.into_result()
}

pub fn validate_event(form: &EventForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if form.title.trim().is_empty() {
        errors.put("title", "Event title is required");
    }
    if form.description.trim().is_empty() {
        errors.put("description", "Description is required");
    }
    if !iso_date_re().is_match(form.date.trim()) {
        errors.put("date", "Event date is required");
    }
    if form.time.trim().is_empty() {
        errors.put("time", "Event time is required");
    }
    if form.location.trim().is_empty() {
        errors.put("location", "Location is required");
    }
    errors.into_result()
}

/// Section names become content-map keys; they must be single tokens.
pub fn validate_section_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("*Section name cannot be empty".to_string());
    }
    if name.contains(' ') {
        return Err("*Section name cannot contain spaces. Use (e.g., HeroSection)".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_admin_form() -> AdminForm {
        AdminForm {
            firstname: "Ada".into(),
            lastname: "Obi".into(),
            email: "ada@example.org".into(),
            phone: "08012345678".into(),
            role: "admin".into(),
            password: "secret1!".into(),
            password_confirm: "secret1!".into(),
        }
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(validate_register_admin(&valid_admin_form()).is_ok());
    }

    #[test]
    fn rejects_weak_passwords() {
        let mut form = valid_admin_form();
        form.password = "short".into();
        form.password_confirm = "short".into();
        let errors = validate_register_admin(&form).unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("*Password must be at least 6 characters")
        );

        // Long enough but missing the digit and special character.
        form.password = "letters".into();
        form.password_confirm = "letters".into();
        let errors = validate_register_admin(&form).unwrap_err();
        assert_eq!(errors.get("password"), Some(PASSWORD_MSG));
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let mut form = valid_admin_form();
        form.password_confirm = "other1!".into();
        let errors = validate_register_admin(&form).unwrap_err();
        assert_eq!(errors.get("password_confirm"), Some("*Passwords do not match"));
    }

    #[test]
    fn phone_must_match_national_format() {
        let mut form = valid_admin_form();
        form.phone = "12345".into();
        let errors = validate_register_admin(&form).unwrap_err();
        assert_eq!(
            errors.get("phone"),
            Some("*Phone number must be at least 10 digits")
        );

        form.phone = "1234567890".into();
        let errors = validate_register_admin(&form).unwrap_err();
        assert_eq!(
            errors.get("phone"),
            Some("*Phone number must contain only digits")
        );

        form.phone = "+2348012345678".into();
        assert!(validate_register_admin(&form).is_ok());
    }

    #[test]
    fn login_requires_well_formed_email() {
        let errors = validate_login(&Credentials {
            email: "not-an-email".into(),
            password: "x".into(),
        })
        .unwrap_err();
        assert_eq!(errors.get("email"), Some("*Invalid email format"));
    }

    #[test]
    fn page_link_rules() {
        let mut link = PageLink {
            page_id: "about-us".into(),
            page_name: "About Us".into(),
            path: "/about-us".into(),
            page_type: "custom".into(),
            ..Default::default()
        };
        assert!(validate_page_link(&link, false).is_ok());

        link.path = "about".into();
        let errors = validate_page_link(&link, false).unwrap_err();
        assert_eq!(errors.get("path"), Some("Path must start with '/'"));

        link.path = "/about".into();
        link.page_id = "About Us".into();
        let errors = validate_page_link(&link, false).unwrap_err();
        assert!(errors.get("page_id").is_some());

        // Children skip slug and type checks.
        link.page_id = String::new();
        link.page_type = String::new();
        assert!(validate_page_link(&link, true).is_ok());
    }

    #[test]
    fn icon_token_format() {
        let link = PageLink {
            page_id: "news".into(),
            page_name: "News".into(),
            path: "/news".into(),
            page_type: "custom".into(),
            icon: "FaRegFile".into(),
            ..Default::default()
        };
        let errors = validate_page_link(&link, false).unwrap_err();
        assert_eq!(
            errors.get("icon"),
            Some("Icon must follow format 'fa:FaIconName'")
        );
    }

    #[test]
    fn publication_author_list_format() {
        let mut form = PublicationForm {
            title: "Flood modelling".into(),
            summary: "A study".into(),
            authors: "Ada Obi, Chidi Eze".into(),
            link: "https://doi.example/10.1".into(),
            date: "2024-06-01".into(),
            ..Default::default()
        };
        assert!(validate_publication(&form).is_ok());

        form.authors = "Ada Obi,Chidi Eze".into();
        let errors = validate_publication(&form).unwrap_err();
        assert!(errors.get("authors").is_some());
    }

    #[test]
    fn news_minimum_lengths() {
        let form = NewsForm {
            title: "Hi".into(),
            brief: "too short".into(),
            content: "short".into(),
            thumbnail: "nota-url".into(),
            date: String::new(),
            ..Default::default()
        };
        let errors = validate_news(&form).unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(errors.get("brief").is_some());
        assert!(errors.get("content").is_some());
        assert!(errors.get("thumbnail").is_some());
        assert!(errors.get("date").is_some());
    }

    #[test]
    fn section_names_are_single_tokens() {
        assert!(validate_section_name("HeroBanner").is_ok());
        assert!(validate_section_name("").is_err());
        assert!(validate_section_name("hero banner").is_err());
    }
}
