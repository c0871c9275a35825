//! Operator-facing text for records and match counts.

use super::console::{Console, ConsoleResult};
use crate::model::employee::Employee;

/// Capitalizes the first letter of each alphabetic run and lowercases the rest.
pub fn title_case(value: &str) -> String {
    let mut rendered = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                rendered.extend(ch.to_uppercase());
            } else {
                rendered.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            rendered.push(ch);
            at_word_start = true;
        }
    }
    rendered
}

/// Display lines for one record, followed by a blank separator.
pub fn employee_lines(employee: &Employee) -> [String; 5] {
    [
        format!("Employee ID: {}", employee.id),
        format!(
            "Name: {} {} {}",
            title_case(&employee.title),
            title_case(&employee.forename),
            title_case(&employee.surname)
        ),
        format!("Email: {}", employee.email),
        format!("Salary: £{}", employee.salary),
        String::new(),
    ]
}

pub fn write_employees<C: Console + ?Sized>(
    console: &mut C,
    employees: &[Employee],
) -> ConsoleResult<()> {
    for employee in employees {
        for line in employee_lines(employee) {
            console.write_line(&line)?;
        }
    }
    Ok(())
}

pub fn search_summary(matches: usize) -> String {
    match matches {
        0 => "No employees match the search criteria.".to_string(),
        1 => "1 employee has been found:".to_string(),
        n => format!("{n} employees have been found:"),
    }
}

pub fn update_summary(matches: usize) -> String {
    match matches {
        0 => "No employees match the update criteria.".to_string(),
        1 => "1 employee will be updated. Employee:".to_string(),
        n => format!("{n} employees will be updated. Employees:"),
    }
}

pub fn delete_summary(matches: usize) -> String {
    format!("The following {matches} employee/s will be deleted:")
}

#[cfg(test)]
mod tests {
    use super::{employee_lines, search_summary, title_case, update_summary};
    use crate::model::employee::Employee;

    #[test]
    fn title_case_capitalizes_each_alphabetic_run() {
        assert_eq!(title_case("john"), "John");
        assert_eq!(title_case("smith-jones"), "Smith-Jones");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("dr"), "Dr");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn employee_lines_render_name_and_salary() {
        let employee = Employee {
            id: 4,
            title: "mr".to_string(),
            forename: "john".to_string(),
            surname: "smith".to_string(),
            email: "js@example.com".to_string(),
            salary: "1234.50".to_string(),
        };
        let lines = employee_lines(&employee);
        assert_eq!(lines[0], "Employee ID: 4");
        assert_eq!(lines[1], "Name: Mr John Smith");
        assert_eq!(lines[2], "Email: js@example.com");
        assert_eq!(lines[3], "Salary: £1234.50");
        assert!(lines[4].is_empty());
    }

    #[test]
    fn summaries_pluralize_counts() {
        assert_eq!(search_summary(0), "No employees match the search criteria.");
        assert_eq!(search_summary(1), "1 employee has been found:");
        assert_eq!(search_summary(3), "3 employees have been found:");
        assert_eq!(update_summary(2), "2 employees will be updated. Employees:");
    }
}
