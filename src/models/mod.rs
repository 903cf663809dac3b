//! Data models for the practice website content.
//!
//! This module contains the structures exchanged with the admin API:
//!
//! - Profile sections: `Hero`, `About`, `Education`, `WorkExperience`
//! - Content catalog: `Service`, `NewsItem`, `Testimonial`
//! - Site data: `Location`, `ContactInfo`, `ContactSubmission`, `SiteSettings`
//!
//! All of them mirror the backend's camelCase JSON and tolerate missing
//! fields; the server owns validation.

pub mod content;
pub mod profile;
pub mod site;

pub use content::{NewsItem, NewsLink, Service, Testimonial};
pub use profile::{
    About, BoardCertification, Education, Hero, HeroStat, License, MedicalDegree,
    ProfessionalFellowship, Specialty, TrainingProgram, Undergraduate, WorkExperience,
};
pub use site::{ContactInfo, ContactSubmission, Location, SiteSettings, SocialLink};
