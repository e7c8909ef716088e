//! Data models for the notification API

pub mod notification;
