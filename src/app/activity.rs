//! Activity use cases: list, sign up, unregister.

use crate::domain::{Capacity, Registration, SignupMachine, SignupRejection};
use crate::error::AppError;
use crate::infra::{get_connection, Store};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDto {
    pub description: String,
    pub schedule: String,
    pub max_participants: Option<i64>,
    pub participants: Vec<String>,
}

/// Activity name to details, as served by `GET /activities`.
pub type ActivityMap = BTreeMap<String, ActivityDto>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

pub fn activity_list(store: &Store) -> Result<ActivityMap, AppError> {
    let conn = get_connection(store)?;

    let mut out = ActivityMap::new();
    let mut stmt =
        conn.prepare("SELECT name, description, schedule, max_participants FROM activities")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            ActivityDto {
                description: r.get::<_, Option<String>>(1)?.unwrap_or_default(),
                schedule: r.get::<_, Option<String>>(2)?.unwrap_or_default(),
                max_participants: r.get(3)?,
                participants: Vec::new(),
            },
        ))
    })?;
    for r in rows {
        let (name, dto) = r?;
        out.insert(name, dto);
    }

    let mut stmt = conn.prepare("SELECT activity_name, email FROM participants ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?))
    })?;
    for r in rows {
        let (activity_name, email) = r?;
        // Orphaned rows are not reported.
        if let Some(activity) = out.get_mut(&activity_name) {
            activity.participants.push(email);
        }
    }
    Ok(out)
}

pub fn activity_signup(
    store: &Store,
    activity_name: &str,
    email: &str,
) -> Result<MessageDto, AppError> {
    let conn = get_connection(store)?;

    let capacity = find_capacity(&conn, activity_name)?.ok_or_else(|| {
        log::warn!("signup for unknown activity {:?}", activity_name);
        AppError::activity_not_found()
    })?;
    let current = Registration::from_exists(registration_id(&conn, activity_name, email)?.is_some());
    let enrolled = enrolled_count(&conn, activity_name)?;

    SignupMachine::sign_up(current, capacity, enrolled).map_err(|r| {
        log::warn!("signup of {} for {} rejected: {}", email, activity_name, r.message());
        r
    })?;

    // Capacity was checked above without a lock; only uniqueness is enforced here.
    conn.execute(
        "INSERT INTO participants (activity_name, email) VALUES (?1, ?2)",
        params![activity_name, email],
    )
    .map_err(map_signup_insert_error)?;

    log::info!("signed up {} for {}", email, activity_name);
    Ok(MessageDto {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub fn activity_unregister(
    store: &Store,
    activity_name: &str,
    email: &str,
) -> Result<MessageDto, AppError> {
    let conn = get_connection(store)?;

    if find_capacity(&conn, activity_name)?.is_none() {
        log::warn!("unregister from unknown activity {:?}", activity_name);
        return Err(AppError::activity_not_found());
    }

    let id = registration_id(&conn, activity_name, email)?;
    SignupMachine::unregister(Registration::from_exists(id.is_some())).map_err(|r| {
        log::warn!("unregister of {} from {} rejected: {}", email, activity_name, r.message());
        r
    })?;

    if let Some(id) = id {
        conn.execute("DELETE FROM participants WHERE id = ?1", [id])?;
    }

    log::info!("unregistered {} from {}", email, activity_name);
    Ok(MessageDto {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}

/// `None` if the activity does not exist.
fn find_capacity(conn: &Connection, activity_name: &str) -> Result<Option<Capacity>, AppError> {
    let max: Option<Option<i64>> = conn
        .query_row(
            "SELECT max_participants FROM activities WHERE name = ?1",
            [activity_name],
            |r| r.get(0),
        )
        .optional()?;
    Ok(max.map(Capacity))
}

fn registration_id(
    conn: &Connection,
    activity_name: &str,
    email: &str,
) -> Result<Option<i64>, AppError> {
    Ok(conn
        .query_row(
            "SELECT id FROM participants WHERE activity_name = ?1 AND email = ?2",
            params![activity_name, email],
            |r| r.get(0),
        )
        .optional()?)
}

fn enrolled_count(conn: &Connection, activity_name: &str) -> Result<i64, AppError> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM participants WHERE activity_name = ?1",
        [activity_name],
        |r| r.get(0),
    )?)
}

/// A concurrent duplicate that slipped past the pre-check reports the same conflict.
fn map_signup_insert_error(e: rusqlite::Error) -> AppError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            SignupRejection::AlreadySignedUp.into()
        }
        _ => e.into(),
    }
}
