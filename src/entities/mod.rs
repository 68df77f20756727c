pub mod admin;
pub mod answer_sheet;
pub mod attendance;
pub mod exam;
pub mod exam_schedule;
pub mod exam_session;
pub mod faculty;
pub mod seating_arrangement;
pub mod semester;
pub mod student;
pub mod student_exam_registration;
pub mod subject;
