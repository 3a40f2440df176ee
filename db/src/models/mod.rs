pub mod student;

pub use student::Entity as Student;
