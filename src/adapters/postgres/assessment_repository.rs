//! PostgreSQL implementation of AssessmentRepository.
//!
//! Persists Assessment aggregates and the email delivery log.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::assessment::{Assessment, ResponseSet, StudentInfo};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp};
use crate::ports::{AssessmentRepository, DeliveryRecord};

/// PostgreSQL implementation of AssessmentRepository.
#[derive(Clone)]
pub struct PostgresAssessmentRepository {
    pool: PgPool,
}

impl PostgresAssessmentRepository {
    /// Creates a new PostgresAssessmentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentRepository for PostgresAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let student = assessment.student();
        let analysis = assessment.analysis();

        sqlx::query(
            r#"
            INSERT INTO assessments (
                id, student_name, student_email, grade_level, school,
                responses, category_scores, overall_score,
                strengths, weaknesses, completed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(assessment.id().as_uuid())
        .bind(student.name())
        .bind(student.email())
        .bind(student.grade_level())
        .bind(student.school())
        .bind(to_smallints(&assessment.responses().values()))
        .bind(to_smallints(&assessment.scores().values()))
        .bind(assessment.overall_score() as i16)
        .bind(skill_keys(&analysis.strengths))
        .bind(skill_keys(&analysis.weaknesses))
        .bind(assessment.completed_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert assessment: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, student_name, student_email, grade_level, school,
                   responses, completed_at
            FROM assessments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch assessment: {}", e),
            )
        })?;

        row.map(row_to_assessment).transpose()
    }

    async fn record_delivery(&self, record: &DeliveryRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO email_logs (
                assessment_id, recipient_email, subject, status, error_message, sent_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.assessment_id.as_uuid())
        .bind(&record.recipient)
        .bind(&record.subject)
        .bind(record.status.as_str())
        .bind(record.error_message.as_deref())
        .bind(record.attempted_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert email log: {}", e),
            )
        })?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn to_smallints(values: &[u8]) -> Vec<i16> {
    values.iter().map(|&v| v as i16).collect()
}

fn skill_keys(skills: &[crate::domain::questionnaire::ExecutiveSkill]) -> Vec<&'static str> {
    skills.iter().map(|s| s.key()).collect()
}

fn from_smallints(values: &[i16]) -> Result<Vec<u8>, DomainError> {
    values
        .iter()
        .map(|&v| {
            u8::try_from(v).map_err(|_| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid stored response value: {}", v),
                )
            })
        })
        .collect()
}

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

fn row_to_assessment(row: sqlx::postgres::PgRow) -> Result<Assessment, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let name: String = column(&row, "student_name")?;
    let email: Option<String> = column(&row, "student_email")?;
    let grade_level: Option<String> = column(&row, "grade_level")?;
    let school: String = column(&row, "school")?;
    let responses: Vec<i16> = column(&row, "responses")?;
    let completed_at: chrono::DateTime<chrono::Utc> = column(&row, "completed_at")?;

    let student = StudentInfo::new(
        &name,
        email.as_deref(),
        grade_level.as_deref(),
        Some(&school),
        &school,
    )
    .map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid stored student: {}", e),
        )
    })?;

    let responses = ResponseSet::from_values(&from_smallints(&responses)?).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid stored responses: {}", e),
        )
    })?;

    Ok(Assessment::reconstitute(
        AssessmentId::from_uuid(id),
        student,
        responses,
        Timestamp::from_datetime(completed_at),
    ))
}
