//! HTTP request handlers

pub mod api;
pub mod fragments;
pub mod health;

use serde::Deserialize;

/// `?poste=` query; a missing parameter reads as empty
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusQuery {
    #[serde(default)]
    pub poste: String,
}

/// `?id=` query; a missing parameter reads as empty
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TramQuery {
    #[serde(default)]
    pub id: String,
}
