//! Console dump of the loaded profile, printed before generation.
//! Read-only; sparse profiles print headings and `N/A` placeholders.

use serde_yaml::Value;

use crate::models::profile::{field_or_placeholder, first_value, render_value, Profile};

const EDUCATION_FIELDS: &[(&str, &str)] = &[
    ("Degree", "degree"),
    ("University", "university"),
    ("GPA", "gpa"),
    ("Graduation Year", "graduation_year"),
    ("Field of Study", "field_of_study"),
    ("Exam", "exam"),
];

const EXPERIENCE_FIELDS: &[(&str, &str)] = &[
    ("Position", "position"),
    ("Company", "company"),
    ("Employment Period", "employment_period"),
    ("Location", "location"),
    ("Industry", "industry"),
];

const PROJECT_FIELDS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("Description", "description"),
    ("Link", "link"),
];

const ACHIEVEMENT_FIELDS: &[(&str, &str)] = &[("Name", "name"), ("Description", "description")];

const LANGUAGE_FIELDS: &[(&str, &str)] =
    &[("Language", "language"), ("Proficiency", "proficiency")];

pub fn print_profile(profile: &Profile) {
    print!("{}", render_profile(profile));
}

/// Renders every recognised section. An empty profile renders nothing.
pub fn render_profile(profile: &Profile) -> String {
    let mut out = String::new();
    if !profile.is_empty() {
        write_profile(&mut out, profile);
    }
    out
}

fn write_profile(out: &mut String, profile: &Profile) {
    line(out, "Personal Information:");
    write_entries(out, profile, "personal_information");

    line(out, "\nEducation Details:");
    for edu in profile.section_items("education_details") {
        write_fields(out, edu, EDUCATION_FIELDS);
        out.push('\n');
    }

    line(out, "Experience Details:");
    for exp in profile.section_items("experience_details") {
        write_fields(out, exp, EXPERIENCE_FIELDS);
        line(out, "  Key Responsibilities:");
        for resp in list_field(exp, "key_responsibilities") {
            line(out, &format!("    - {}", first_value(resp)));
        }
        line(out, "  Skills Acquired:");
        for skill in list_field(exp, "skills_acquired") {
            line(out, &format!("    - {}", render_value(skill)));
        }
        out.push('\n');
    }

    line(out, "Projects:");
    for project in profile.section_items("projects") {
        write_fields(out, project, PROJECT_FIELDS);
        out.push('\n');
    }

    line(out, "Achievements:");
    for achievement in profile.section_items("achievements") {
        write_fields(out, achievement, ACHIEVEMENT_FIELDS);
        out.push('\n');
    }

    line(out, "Certifications:");
    let certifications = profile.section_items("certifications");
    if certifications.is_empty() {
        line(out, "  No certifications listed.");
    }
    for cert in certifications {
        line(out, &format!("  - {}", render_value(cert)));
    }
    out.push('\n');

    line(out, "Languages:");
    for language in profile.section_items("languages") {
        write_fields(out, language, LANGUAGE_FIELDS);
        out.push('\n');
    }

    line(out, "Interests:");
    for interest in profile.section_items("interests") {
        line(out, &format!("  - {}", render_value(interest)));
    }
    out.push('\n');

    line(out, "Availability:");
    line(
        out,
        &format!(
            "  Notice Period: {}",
            profile.nested_field("availability", "notice_period")
        ),
    );
    out.push('\n');

    line(out, "Salary Expectations:");
    line(
        out,
        &format!(
            "  Salary Range (USD): {}",
            profile.nested_field("salary_expectations", "salary_range_usd")
        ),
    );
    out.push('\n');

    for (heading, key) in [
        ("Self Identification", "self_identification"),
        ("Legal Authorization", "legal_authorization"),
        ("Work Preferences", "work_preferences"),
    ] {
        line(out, &format!("{heading}:"));
        write_entries(out, profile, key);
        out.push('\n');
    }
}

fn write_entries(out: &mut String, profile: &Profile, key: &str) {
    for (k, v) in profile.section_entries(key) {
        line(out, &format!("  {k}: {v}"));
    }
}

fn write_fields(out: &mut String, node: &Value, fields: &[(&str, &str)]) {
    for (label, field) in fields {
        line(out, &format!("  {label}: {}", field_or_placeholder(node, field)));
    }
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn list_field<'a>(node: &'a Value, field: &str) -> &'a [Value] {
    match node.get(field) {
        Some(Value::Sequence(items)) => items,
        _ => &[],
    }
}
