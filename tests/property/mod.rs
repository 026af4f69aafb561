pub mod lesson_properties;
