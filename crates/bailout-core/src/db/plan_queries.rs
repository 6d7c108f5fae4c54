//! Plan creation and read queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use crate::{
    error::{BailoutError, DatabaseResultExt, Result},
    expiry::is_expired,
    models::{Participant, ParticipantSecret, Plan, PlanStatus},
};

/// Smallest plan that can be created.
pub const MIN_PARTICIPANTS: u32 = 2;
/// Largest plan that can be created.
pub const MAX_PARTICIPANTS: u32 = 5;
/// Label used when a plan is created without a description.
pub const DEFAULT_DESCRIPTION: &str = "A secret plan";

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (id, description, status, num_required, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_PARTICIPANT_SQL: &str =
    "INSERT INTO participants (plan_id, secret, name, wants_to_bail) VALUES (?1, ?2, ?3, 0)";
const SELECT_PLAN_SQL: &str =
    "SELECT id, description, status, num_required, created_at FROM plans WHERE id = ?1";
const SELECT_PARTICIPANTS_SQL: &str =
    "SELECT id, secret, name, wants_to_bail FROM participants WHERE plan_id = ?1 ORDER BY id";

impl super::Database {
    /// Creates a plan and exactly `num_participants` participants in one
    /// transaction. Each participant gets a fresh secret and starts out not
    /// wanting to bail.
    pub fn create_plan(
        &mut self,
        description: Option<&str>,
        num_participants: u32,
        now: Timestamp,
    ) -> Result<Plan> {
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&num_participants) {
            return Err(BailoutError::invalid_input("num_participants").with_reason(format!(
                "Number of participants must be between {MIN_PARTICIPANTS} and {MAX_PARTICIPANTS}."
            )));
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();
        let plan_id = uuid::Uuid::new_v4().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                &plan_id,
                &description,
                PlanStatus::Active.as_str(),
                num_participants,
                now.to_string()
            ],
        )
        .db_context("Failed to insert plan")?;

        let mut participants = Vec::with_capacity(num_participants as usize);
        for n in 1..=num_participants {
            let secret = ParticipantSecret::generate();
            let name = format!("Participant {n}");
            tx.execute(
                INSERT_PARTICIPANT_SQL,
                params![&plan_id, secret.expose(), &name],
            )
            .db_context("Failed to insert participant")?;

            participants.push(Participant {
                id: tx.last_insert_rowid() as u64,
                secret,
                name,
                wants_to_bail: false,
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id: plan_id,
            description: Some(description),
            status: PlanStatus::Active,
            num_required: num_participants,
            created_at: now,
            participants,
        })
    }

    /// Retrieves a plan and all of its participants as one consistent
    /// snapshot. No expiry check is applied.
    pub fn get_plan(&mut self, id: &str) -> Result<Option<Plan>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = load_plan(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(plan)
    }

    /// Reads a plan for the participant holding `secret`.
    ///
    /// Fails with [`BailoutError::NotFound`] if the plan is missing or
    /// expired at `now`, and with [`BailoutError::InvalidParticipant`] if the
    /// secret belongs to none of its participants.
    pub fn get_live_plan(&mut self, id: &str, secret: &str, now: Timestamp) -> Result<Plan> {
        let plan = self.get_plan(id)?;
        let plan = ensure_live(plan, now)?;

        if plan.participant_by_secret(secret).is_none() {
            return Err(BailoutError::InvalidParticipant);
        }
        Ok(plan)
    }
}

/// Rejects missing and expired plans alike.
pub(super) fn ensure_live(plan: Option<Plan>, now: Timestamp) -> Result<Plan> {
    match plan {
        Some(plan) if !is_expired(plan.created_at, now) => Ok(plan),
        _ => Err(BailoutError::NotFound),
    }
}

/// Loads the plan row and its participants through `conn`, which is expected
/// to be an open transaction.
pub(super) fn load_plan(conn: &Connection, id: &str) -> Result<Option<Plan>> {
    let plan = conn
        .query_row(SELECT_PLAN_SQL, params![id], build_plan_from_row)
        .optional()
        .db_context("Failed to query plan")?;

    let Some(mut plan) = plan else {
        return Ok(None);
    };

    plan.participants = load_participants(conn, id)?;
    Ok(Some(plan))
}

/// Loads the participants of a plan in creation order.
pub(super) fn load_participants(conn: &Connection, plan_id: &str) -> Result<Vec<Participant>> {
    let mut stmt = conn
        .prepare(SELECT_PARTICIPANTS_SQL)
        .db_context("Failed to prepare query")?;

    let participants = stmt
        .query_map(params![plan_id], |row| {
            Ok(Participant {
                id: row.get::<_, i64>(0)? as u64,
                secret: ParticipantSecret::from(row.get::<_, String>(1)?),
                name: row.get(2)?,
                wants_to_bail: row.get(3)?,
            })
        })
        .db_context("Failed to query participants")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch participants")?;

    Ok(participants)
}

fn build_plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
    let status_str: String = row.get(2)?;
    let status = status_str.parse::<PlanStatus>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid plan status: {status_str}"),
            )),
        )
    })?;

    Ok(Plan {
        id: row.get(0)?,
        description: row.get(1)?,
        status,
        num_required: row.get(3)?,
        created_at: row
            .get::<_, String>(4)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
        participants: Vec::new(),
    })
}
