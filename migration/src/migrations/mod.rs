pub mod m202410190001_create_students;
