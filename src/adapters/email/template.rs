//! HTML rendering of the assessment report email.
//!
//! Produces a self-contained page with inline CSS so it renders the same in
//! mail clients that strip `<link>` tags.

use chrono_tz::Tz;

use crate::domain::assessment::{Interpretation, MAX_CATEGORY_SCORE, MIN_CATEGORY_SCORE};
use crate::ports::{AssessmentReport, ReportRow, REPORT_TITLE};

const STYLES: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #333; max-width: 800px; margin: 0 auto; padding: 20px; background-color: #f8fafc; }
        .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; border-radius: 12px 12px 0 0; text-align: center; }
        .content { background: white; padding: 30px; border-radius: 0 0 12px 12px; box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1); }
        .student-info { background: #f1f5f9; padding: 20px; border-radius: 8px; margin-bottom: 30px; border-left: 4px solid #3b82f6; }
        .results-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-bottom: 30px; }
        .strength-card, .weakness-card { padding: 20px; border-radius: 8px; border: 1px solid #e2e8f0; }
        .strength-card { background: #f0fdf4; border-color: #22c55e; }
        .weakness-card { background: #fff7ed; border-color: #f59e0b; }
        .strength-title { color: #16a34a; font-weight: 600; font-size: 18px; margin-bottom: 15px; }
        .weakness-title { color: #d97706; font-weight: 600; font-size: 18px; margin-bottom: 15px; }
        .strength-item, .weakness-item { background: rgba(255, 255, 255, 0.8); padding: 10px 15px; border-radius: 6px; margin-bottom: 8px; font-weight: 500; }
        .strength-item { color: #166534; border-left: 3px solid #22c55e; }
        .weakness-item { color: #92400e; border-left: 3px solid #f59e0b; }
        .scores-table { width: 100%; border-collapse: collapse; margin-top: 20px; background: white; }
        .scores-table th { background: #4f46e5; color: white; padding: 15px; text-align: left; font-weight: 600; }
        .scores-table td { padding: 12px 15px; border-bottom: 1px solid #e2e8f0; }
        .score-bar { background: #e2e8f0; height: 8px; border-radius: 4px; overflow: hidden; margin-top: 5px; }
        .score-fill { height: 100%; background: #4f46e5; border-radius: 4px; }
        .interpretation { background: #eff6ff; border: 1px solid #3b82f6; border-radius: 8px; padding: 20px; margin-top: 30px; }
        .interpretation h3 { color: #1e40af; margin-top: 0; }
        .footer { text-align: center; margin-top: 30px; color: #64748b; font-size: 14px; }
        @media (max-width: 600px) { .results-grid { grid-template-columns: 1fr; } }
"#;

/// Renders [`AssessmentReport`]s as HTML email bodies.
#[derive(Debug, Clone)]
pub struct ReportTemplate {
    time_zone: Tz,
    contact_email: String,
    school: String,
}

impl ReportTemplate {
    /// `time_zone` controls how the completion time is displayed.
    pub fn new(
        time_zone: Tz,
        contact_email: impl Into<String>,
        school: impl Into<String>,
    ) -> Self {
        Self {
            time_zone,
            contact_email: contact_email.into(),
            school: school.into(),
        }
    }

    pub fn render(&self, report: &AssessmentReport) -> String {
        let mut html = String::with_capacity(16 * 1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("    <title>{}</title>\n", REPORT_TITLE));
        html.push_str(&format!("    <style>{}    </style>\n", STYLES));
        html.push_str("</head>\n<body>\n");
        html.push_str(&self.header());
        html.push_str("    <div class=\"content\">\n");
        html.push_str(&self.student_section(report));
        html.push_str(&self.highlights_section(report));
        html.push_str(&self.scores_section(&report.rows()));
        html.push_str(&self.guidance_section());
        html.push_str("    </div>\n");
        html.push_str(&self.footer());
        html.push_str("</body>\n</html>\n");
        html
    }

    fn header(&self) -> String {
        let mut section = String::from("    <div class=\"header\">\n");
        section.push_str("        <div style=\"font-size: 24px; font-weight: bold;\">Executive Skills Assessment</div>\n");
        section.push_str("        <h1 style=\"margin: 0; font-size: 28px;\">Assessment Results Report</h1>\n");
        section.push_str("        <p style=\"margin: 10px 0 0 0; opacity: 0.9;\">Based on \"Smart but Scattered Teens\" by Peg Dawson &amp; Richard Guare</p>\n");
        section.push_str("    </div>\n");
        section
    }

    fn student_section(&self, report: &AssessmentReport) -> String {
        let assessment = report.assessment();
        let student = assessment.student();

        let mut section = String::from("        <div class=\"student-info\">\n");
        section.push_str(
            "            <h2 style=\"margin-top: 0; color: #1e40af;\">Student Information</h2>\n",
        );
        section.push_str(&format!(
            "            <p><strong>Name:</strong> {}</p>\n",
            escape_html(student.name())
        ));
        if let Some(grade) = student.grade_level() {
            section.push_str(&format!(
                "            <p><strong>Grade Level:</strong> {}</p>\n",
                escape_html(grade)
            ));
        }
        if let Some(email) = student.email() {
            section.push_str(&format!(
                "            <p><strong>Email:</strong> {}</p>\n",
                escape_html(email)
            ));
        }
        section.push_str(&format!(
            "            <p><strong>Assessment Completed:</strong> {}</p>\n",
            assessment
                .completed_at()
                .format_in(&self.time_zone, "%A, %B %-d, %Y at %-I:%M %p")
        ));
        section.push_str("        </div>\n");
        section
    }

    fn highlights_section(&self, report: &AssessmentReport) -> String {
        let mut section = String::from("        <div class=\"results-grid\">\n");

        section.push_str("            <div class=\"strength-card\">\n");
        section.push_str(
            "                <div class=\"strength-title\">Executive Skills Strengths</div>\n",
        );
        section.push_str("                <p style=\"color: #166534; font-size: 14px;\">Areas where the student functions well (lowest scores indicate better functioning):</p>\n");
        for label in report.strength_labels() {
            section.push_str(&format!(
                "                <div class=\"strength-item\">{}</div>\n",
                label
            ));
        }
        section.push_str("            </div>\n");

        section.push_str("            <div class=\"weakness-card\">\n");
        section.push_str("                <div class=\"weakness-title\">Areas for Growth</div>\n");
        section.push_str("                <p style=\"color: #92400e; font-size: 14px;\">Areas that may benefit from additional support and intervention:</p>\n");
        for label in report.weakness_labels() {
            section.push_str(&format!(
                "                <div class=\"weakness-item\">{}</div>\n",
                label
            ));
        }
        section.push_str("            </div>\n");

        section.push_str("        </div>\n");
        section
    }

    fn scores_section(&self, rows: &[ReportRow]) -> String {
        let mut section = String::from("        <div class=\"scores-section\">\n");
        section.push_str("            <h3 style=\"color: #1e40af; border-bottom: 2px solid #e2e8f0; padding-bottom: 10px;\">Detailed Scores by Executive Skill Category</h3>\n");
        section.push_str(&format!(
            "            <p style=\"color: #64748b; font-size: 14px;\">Each category is scored from {}-{} (sum of three questions, each rated 1-7). Lower scores indicate areas of strength, while higher scores suggest areas needing support.</p>\n",
            MIN_CATEGORY_SCORE, MAX_CATEGORY_SCORE
        ));
        section.push_str("            <table class=\"scores-table\">\n");
        section.push_str("                <thead><tr><th>Executive Skill Category</th><th>Score</th><th>Interpretation</th></tr></thead>\n");
        section.push_str("                <tbody>\n");
        for row in rows {
            section.push_str(&format!(
                "                    <tr><td style=\"font-weight: 500;\">{}</td><td><strong>{}/{}</strong><div class=\"score-bar\"><div class=\"score-fill\" style=\"width: {:.1}%;\"></div></div></td><td style=\"color: {}; font-weight: 500;\">{}</td></tr>\n",
                row.label,
                row.score,
                row.max_score,
                row.percentage,
                interpretation_color(row.interpretation),
                row.interpretation.label()
            ));
        }
        section.push_str("                </tbody>\n");
        section.push_str("            </table>\n");
        section.push_str("        </div>\n");
        section
    }

    fn guidance_section(&self) -> String {
        let mut section = String::from("        <div class=\"interpretation\">\n");
        section.push_str("            <h3>Understanding the Results</h3>\n");
        section.push_str("            <h4 style=\"color: #1e40af;\">Scoring Interpretation:</h4>\n");
        section.push_str("            <ul>\n");
        for (range, interpretation, meaning) in [
            ("3-7", Interpretation::Strong, "Student functions well in this executive skill"),
            ("8-14", Interpretation::Moderate, "Some variability or inconsistency"),
            ("15-21", Interpretation::NeedsSupport, "Consider targeted interventions"),
        ] {
            section.push_str(&format!(
                "                <li><strong>{} points:</strong> {} - {}</li>\n",
                range,
                interpretation.label(),
                meaning
            ));
        }
        section.push_str("            </ul>\n");
        section.push_str("            <h4 style=\"color: #1e40af;\">Next Steps:</h4>\n");
        section.push_str("            <ul>\n");
        section.push_str("                <li>Focus intervention efforts on the highest-scoring (weakest) areas</li>\n");
        section.push_str("                <li>Leverage strengths to support areas needing improvement</li>\n");
        section.push_str("                <li>Consider environmental modifications and teaching strategies</li>\n");
        section.push_str("                <li>Monitor progress with regular check-ins and reassessment</li>\n");
        section.push_str("            </ul>\n");
        section.push_str("        </div>\n");
        section
    }

    fn footer(&self) -> String {
        let mut section = String::from("    <div class=\"footer\">\n");
        section.push_str(&format!(
            "        <p>This report was generated by the Executive Skills Assessment System<br>For questions or follow-up, please contact: {}<br><strong>{} - Supporting Student Success</strong></p>\n",
            escape_html(&self.contact_email),
            escape_html(&self.school)
        ));
        section.push_str("        <p style=\"font-size: 12px; color: #94a3b8;\">Assessment based on research by Peg Dawson and Richard Guare<br>\"Executive Skills in Children and Adolescents\" &amp; \"Smart but Scattered Teens\"</p>\n");
        section.push_str("    </div>\n");
        section
    }
}

fn interpretation_color(interpretation: Interpretation) -> &'static str {
    match interpretation {
        Interpretation::Strong => "#16a34a",
        Interpretation::Moderate => "#d97706",
        Interpretation::NeedsSupport => "#dc2626",
    }
}

/// Escapes text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
