//! HTTP handlers

pub mod contact;
pub mod pages;
pub mod projects;
