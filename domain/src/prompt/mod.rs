//! Prompt templates for the generative backend

mod template;

pub use template::RecommendationPrompt;
