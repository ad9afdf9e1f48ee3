pub mod pricing_service;
pub mod rate_resolver;
pub mod variant_overlay;
