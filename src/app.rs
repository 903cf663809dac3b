//! Application state and command implementations.
//!
//! `App` wires the config, the persisted session store and the API client
//! together and backs every CLI command. Each protected command runs the
//! route guard first; there is no cached "already verified" state between
//! commands.

use std::io::{self, Read, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiError};
use crate::auth::{CredentialStore, FileSessionStore, Navigator, RouteGuard, SessionStore};
use crate::config::Config;
use crate::models::{
    About, ContactInfo, Education, Hero, Location, NewsItem, Service, SiteSettings, Testimonial,
    WorkExperience,
};

/// Environment variables that pre-seed the login prompts
const USERNAME_ENV: &str = "CLINIC_ADMIN_USERNAME";
const PASSWORD_ENV: &str = "CLINIC_ADMIN_PASSWORD";

/// Navigator for a terminal session: the web admin's hard redirect to
/// `/login` becomes an instruction to sign in again.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn redirect_to_login(&self) {
        eprintln!("Session is no longer valid. Run `clinic-admin login` to sign in again.");
    }
}

pub struct App {
    pub config: Config,
    session: Arc<FileSessionStore>,
    navigator: Arc<dyn Navigator>,
    api: ApiClient,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let session = Arc::new(FileSessionStore::open(config.data_dir()?));
        let navigator: Arc<dyn Navigator> = Arc::new(TerminalNavigator);
        let api = ApiClient::new(
            config.api_base_url(),
            session.clone(),
            navigator.clone(),
        )?;
        Ok(Self {
            config,
            session,
            navigator,
            api,
        })
    }

    /// Run the route guard before a protected command. On failure the
    /// guard has already routed to login; the error just stops the command.
    async fn ensure_authenticated(&self) -> Result<()> {
        let mut guard = RouteGuard::new(self.navigator.clone());
        guard.ensure(&self.api).await?;
        debug!(state = ?guard.state(), "Route guard passed");
        Ok(())
    }

    // =========================================================================
    // Session commands
    // =========================================================================

    /// Interactive login: prompt for credentials, authenticate, persist
    /// the session and remember the username for next time.
    pub async fn login_interactive(&mut self) -> Result<()> {
        println!("\n=== Clinic Admin Login ===\n");

        let username = match std::env::var(USERNAME_ENV).ok().filter(|v| !v.is_empty()) {
            Some(username) => username,
            None => self.prompt_username()?,
        };

        let password = match std::env::var(PASSWORD_ENV).ok().filter(|v| !v.is_empty()) {
            Some(password) => password,
            None => {
                if CredentialStore::has_credentials(&username) {
                    print!("Use stored password? [Y/n]: ");
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if input.trim().to_lowercase() != "n" {
                        CredentialStore::get_password(&username)?
                    } else {
                        Self::prompt_password()?
                    }
                } else {
                    Self::prompt_password()?
                }
            }
        };

        println!("\nAuthenticating...");

        self.api
            .login(&username, &password)
            .await
            .context("Login failed")?;

        if let Err(e) = CredentialStore::store(&username, &password) {
            warn!(error = %e, "Failed to store credentials");
        }

        self.config.last_username = Some(username);
        if let Err(e) = self.config.save() {
            warn!(error = %e, "Failed to save config");
        }

        info!("Login successful");
        println!("Login successful!\n");
        Ok(())
    }

    fn prompt_username(&self) -> Result<String> {
        if let Some(ref last_user) = self.config.last_username {
            print!("Username [{}]: ", last_user);
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            let input = input.trim();

            if input.is_empty() {
                return Ok(last_user.clone());
            }
            return Ok(input.to_string());
        }

        print!("Username: ");
        io::stdout().flush()?;

        let mut username = String::new();
        io::stdin().read_line(&mut username)?;
        Ok(username.trim().to_string())
    }

    fn prompt_password() -> Result<String> {
        let password = rpassword::prompt_password("Password: ")?;
        Ok(password)
    }

    /// Drop the local session. The stored keychain password is kept so
    /// the next login only needs a confirmation.
    pub fn logout(&self) -> Result<()> {
        self.api.logout()?;
        println!("Logged out.");
        Ok(())
    }

    /// Show who is logged in and whether the server still accepts the
    /// session.
    pub async fn status(&self) -> Result<()> {
        let Some(data) = self.session.get() else {
            println!("Not logged in.");
            return Ok(());
        };

        println!(
            "Logged in as {}",
            data.username.as_deref().unwrap_or("unknown")
        );
        println!(
            "Session started {}",
            data.created_at.format("%Y-%m-%d %H:%M UTC")
        );

        match self.api.verify().await {
            Ok(_) => println!("Session is valid."),
            Err(ApiError::Unauthorized | ApiError::NoSession) => {
                println!("Session was rejected by the server. Log in again.");
            }
            Err(e) => return Err(e).context("Could not verify session"),
        }
        Ok(())
    }

    // =========================================================================
    // Content commands
    // =========================================================================

    /// Content counts across the main resources. Each count falls back to
    /// zero when its fetch fails, like the dashboard this replaces.
    pub async fn dashboard(&self) -> Result<()> {
        self.ensure_authenticated().await?;

        let endpoints = ["/services", "/locations", "/testimonials", "/news"];
        let fetches = endpoints.iter().map(|path| self.api.get::<Vec<Value>>(path));
        let results = join_all(fetches).await;

        println!("Content summary:");
        for (path, result) in endpoints.iter().zip(results) {
            let count = result.map(|items| items.len()).unwrap_or(0);
            println!("  {:<14} {}", path.trim_start_matches('/'), count);
        }
        Ok(())
    }

    pub async fn list(&self, resource: &str) -> Result<()> {
        self.ensure_authenticated().await?;

        match resource {
            "services" => {
                let mut services = self.api.fetch_services().await?;
                services.sort_by_key(|s| s.order);
                for service in &services {
                    println!(
                        "{:<26} [{}] {}",
                        service.title,
                        service.icon,
                        truncate(&service.description, 60)
                    );
                }
                println!("{} service(s)", services.len());
            }
            "locations" => {
                let locations = self.api.fetch_locations().await?;
                for location in &locations {
                    let marker = if location.is_active { " " } else { "-" };
                    println!(
                        "{} {:<22} {}  {}",
                        marker,
                        location.name,
                        location.formatted_address(),
                        location.phone
                    );
                }
                println!("{} location(s)", locations.len());
            }
            "testimonials" => {
                let testimonials = self.api.fetch_testimonials().await?;
                for testimonial in &testimonials {
                    let marker = if testimonial.is_approved { "approved" } else { "pending " };
                    println!(
                        "[{}] {}/5  {:<18} {}",
                        marker,
                        testimonial.rating,
                        testimonial.name,
                        truncate(&testimonial.comment, 50)
                    );
                }
                println!("{} testimonial(s)", testimonials.len());
            }
            "news" => {
                let news = self.api.fetch_news().await?;
                for item in &news {
                    println!(
                        "{:<10} {:<8} {}",
                        truncate(&item.date, 10),
                        item.kind,
                        item.title
                    );
                }
                println!("{} item(s)", news.len());
            }
            "submissions" => {
                let submissions = self.api.fetch_submissions().await?;
                for submission in &submissions {
                    let marker = if submission.read { "    " } else { "new " };
                    println!(
                        "{}{}  {:<18} {:<24} {}",
                        marker,
                        submission.received_display(),
                        submission.name,
                        submission.email,
                        truncate(&submission.message, 40)
                    );
                }
                println!("{} submission(s)", submissions.len());
            }
            "experience" => {
                let experiences = self.api.fetch_work_experience().await?;
                for experience in &experiences {
                    println!(
                        "{:<16} {:<24} {} ({})",
                        experience.period(),
                        experience.title,
                        experience.organization,
                        experience.location
                    );
                }
                println!("{} entries", experiences.len());
            }
            other => anyhow::bail!(
                "Unknown resource '{}'. Expected one of: services, locations, testimonials, news, submissions, experience",
                other
            ),
        }
        Ok(())
    }

    pub async fn show(&self, section: &str) -> Result<()> {
        self.ensure_authenticated().await?;

        match section {
            "hero" => {
                let hero = self.api.fetch_hero().await?;
                println!("Title:     {}", hero.title);
                println!("Subtitle:  {}", hero.subtitle);
                println!("Badge:     {}", hero.badge);
                println!("Bio:       {}", hero.bio);
                for stat in &hero.stats {
                    println!("Stat:      {} = {} [{}]", stat.label, stat.value, stat.icon);
                }
                for specialty in &hero.specialties {
                    println!("Specialty: {}", specialty.name);
                }
            }
            "about" => {
                let about = self.api.fetch_about().await?;
                println!("{}", serde_json::to_string_pretty(&about)?);
            }
            "education" => {
                let education = self.api.fetch_education().await?;
                println!("{}", serde_json::to_string_pretty(&education)?);
            }
            "contact" => {
                let contact = self.api.fetch_contact().await?;
                println!("Email:   {}", contact.email);
                println!("Phone:   {}", contact.phone);
                println!("Address: {}", contact.address);
                for link in &contact.social_links {
                    println!("Social:  {} {}", link.platform, link.url);
                }
            }
            "settings" => {
                let settings = self.api.fetch_settings().await?;
                println!("Site title:       {}", settings.site_title);
                println!("Meta description: {}", settings.meta_description);
                println!("Footer text:      {}", settings.footer_text);
            }
            other => anyhow::bail!(
                "Unknown section '{}'. Expected one of: hero, about, education, contact, settings",
                other
            ),
        }
        Ok(())
    }

    /// Replace a singleton section from JSON on stdin.
    pub async fn set_section(&self, section: &str) -> Result<()> {
        self.ensure_authenticated().await?;
        let input = read_stdin()?;

        match section {
            "hero" => {
                let hero: Hero = serde_json::from_str(&input).context("Invalid hero JSON")?;
                self.api.update_hero(&hero).await?;
            }
            "about" => {
                let about: About = serde_json::from_str(&input).context("Invalid about JSON")?;
                self.api.update_about(&about).await?;
            }
            "education" => {
                let education: Education =
                    serde_json::from_str(&input).context("Invalid education JSON")?;
                self.api.update_education(&education).await?;
            }
            "contact" => {
                let contact: ContactInfo =
                    serde_json::from_str(&input).context("Invalid contact JSON")?;
                self.api.update_contact(&contact).await?;
            }
            "settings" => {
                let settings: SiteSettings =
                    serde_json::from_str(&input).context("Invalid settings JSON")?;
                self.api.update_settings(&settings).await?;
            }
            other => anyhow::bail!(
                "Unknown section '{}'. Expected one of: hero, about, education, contact, settings",
                other
            ),
        }
        println!("Updated {}.", section);
        Ok(())
    }

    /// Create a list resource from JSON on stdin.
    pub async fn add(&self, resource: &str) -> Result<()> {
        self.ensure_authenticated().await?;
        let input = read_stdin()?;

        let id = match resource {
            "service" => {
                let service: Service =
                    serde_json::from_str(&input).context("Invalid service JSON")?;
                self.api.create_service(&service).await?.id
            }
            "location" => {
                let location: Location =
                    serde_json::from_str(&input).context("Invalid location JSON")?;
                self.api.create_location(&location).await?.id
            }
            "testimonial" => {
                let testimonial: Testimonial =
                    serde_json::from_str(&input).context("Invalid testimonial JSON")?;
                self.api.create_testimonial(&testimonial).await?.id
            }
            "news" => {
                let item: NewsItem =
                    serde_json::from_str(&input).context("Invalid news JSON")?;
                self.api.create_news_item(&item).await?.id
            }
            "experience" => {
                let experience: WorkExperience =
                    serde_json::from_str(&input).context("Invalid experience JSON")?;
                self.api.create_work_experience(&experience).await?.id
            }
            other => anyhow::bail!(
                "Unknown resource '{}'. Expected one of: service, location, testimonial, news, experience",
                other
            ),
        };
        println!(
            "Created {} {}.",
            resource,
            id.unwrap_or_else(|| "(no id returned)".to_string())
        );
        Ok(())
    }

    /// Update a list resource from JSON on stdin.
    pub async fn update(&self, resource: &str, id: &str) -> Result<()> {
        self.ensure_authenticated().await?;
        let input = read_stdin()?;

        match resource {
            "service" => {
                let service: Service =
                    serde_json::from_str(&input).context("Invalid service JSON")?;
                self.api.update_service(id, &service).await?;
            }
            "location" => {
                let location: Location =
                    serde_json::from_str(&input).context("Invalid location JSON")?;
                self.api.update_location(id, &location).await?;
            }
            "testimonial" => {
                let testimonial: Testimonial =
                    serde_json::from_str(&input).context("Invalid testimonial JSON")?;
                self.api.update_testimonial(id, &testimonial).await?;
            }
            "news" => {
                let item: NewsItem =
                    serde_json::from_str(&input).context("Invalid news JSON")?;
                self.api.update_news_item(id, &item).await?;
            }
            "experience" => {
                let experience: WorkExperience =
                    serde_json::from_str(&input).context("Invalid experience JSON")?;
                self.api.update_work_experience(id, &experience).await?;
            }
            other => anyhow::bail!(
                "Unknown resource '{}'. Expected one of: service, location, testimonial, news, experience",
                other
            ),
        }
        println!("Updated {} {}.", resource, id);
        Ok(())
    }

    pub async fn mark_submission_read(&self, id: &str) -> Result<()> {
        self.ensure_authenticated().await?;
        self.api.mark_submission_read(id).await?;
        println!("Marked submission {} as read.", id);
        Ok(())
    }

    pub async fn delete(&self, resource: &str, id: &str) -> Result<()> {
        self.ensure_authenticated().await?;

        match resource {
            "service" => self.api.delete_service(id).await?,
            "location" => self.api.delete_location(id).await?,
            "testimonial" => self.api.delete_testimonial(id).await?,
            "news" => self.api.delete_news_item(id).await?,
            "experience" => self.api.delete_work_experience(id).await?,
            "submission" => self.api.delete_submission(id).await?,
            other => anyhow::bail!(
                "Unknown resource '{}'. Expected one of: service, location, testimonial, news, experience, submission",
                other
            ),
        };
        println!("Deleted {} {}.", resource, id);
        Ok(())
    }

    /// Dump every content resource as one JSON document to stdout.
    pub async fn export(&self) -> Result<()> {
        self.ensure_authenticated().await?;

        let export = serde_json::json!({
            "hero": self.api.fetch_hero().await?,
            "about": self.api.fetch_about().await?,
            "education": self.api.fetch_education().await?,
            "workExperience": self.api.fetch_work_experience().await?,
            "services": self.api.fetch_services().await?,
            "locations": self.api.fetch_locations().await?,
            "testimonials": self.api.fetch_testimonials().await?,
            "news": self.api.fetch_news().await?,
            "contact": self.api.fetch_contact().await?,
            "settings": self.api.fetch_settings().await?,
        });

        println!("{}", serde_json::to_string_pretty(&export)?);
        Ok(())
    }
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read JSON from stdin")?;
    Ok(input)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_text_ellipsis() {
        let long = "a".repeat(80);
        let out = truncate(&long, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }
}
