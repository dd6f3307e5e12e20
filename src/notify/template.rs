use crate::models::AttendanceStatus;

pub fn subject(status: AttendanceStatus) -> String {
    format!("Attendance update: {status}")
}

pub fn body(name: &str, status: AttendanceStatus) -> String {
    format!("Hello {name}, You are marked {status} today.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_matches_template() {
        assert_eq!(
            body("Test User", AttendanceStatus::Late),
            "Hello Test User, You are marked late today."
        );
        assert_eq!(subject(AttendanceStatus::Absent), "Attendance update: absent");
    }
}
