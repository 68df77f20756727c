pub mod admin_repository;
pub mod answer_sheet_repository;
pub mod attendance_repository;
pub mod exam_repository;
pub mod faculty_repository;
pub mod registration_repository;
pub mod seating_repository;
pub mod semester_repository;
pub mod session_repository;
pub mod student_repository;
pub mod subject_repository;

pub use admin_repository::AdminRepository;
pub use answer_sheet_repository::{AllocationStats, AnswerSheetRepository, FacultyPending};
pub use attendance_repository::AttendanceRepository;
pub use exam_repository::ExamRepository;
pub use faculty_repository::{FacultyRepository, FacultyUpdate};
pub use registration_repository::RegistrationRepository;
pub use seating_repository::SeatingRepository;
pub use semester_repository::SemesterRepository;
pub use session_repository::{SessionRepository, SessionSummary};
pub use student_repository::{StudentRepository, StudentUpdate};
pub use subject_repository::{SubjectRepository, SubjectUpdate};
