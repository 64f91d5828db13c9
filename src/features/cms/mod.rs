//! CMS resources behind the public site: news, activities, benefits and FAQs.

pub mod activities;
pub mod benefits;
pub mod faqs;
pub mod news;
pub mod types;
