pub mod face_index;
pub mod faces;
pub mod object_store;
