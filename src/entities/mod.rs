pub mod note;

pub use note::Entity as Note;
