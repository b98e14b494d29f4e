// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod drift;
mod late_initialization;
mod projection;
mod strategies;
