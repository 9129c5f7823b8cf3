#![allow(dead_code)]

pub mod chart;
pub mod config;
