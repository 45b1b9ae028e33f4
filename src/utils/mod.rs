// Utils module - Utility functions

pub mod custom_resolvers;
