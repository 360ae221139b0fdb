use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    crate::{
        api::error::{is_unique_violation, ServerError},
        internal_error,
        model::NewUser,
    },
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Expr, Order, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

use crate::types::Uuid;

pub const USERNAME_UNAVAILABLE: &str = "Username not available";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

#[cfg(feature = "backend")]
const USER_STAR: [UserIden; 2] = [UserIden::Id, UserIden::Username];

#[cfg(feature = "backend")]
impl User {
    /// All users in the order they were registered
    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, ServerError> {
        let (sql, values) = Query::select()
            .columns(USER_STAR)
            .from(UserIden::Table)
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(users)
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, ServerError> {
        let (sql, values) = Query::select()
            .columns(USER_STAR)
            .from(UserIden::Table)
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt
            .query_row(&*values.as_params(), User::from_row)
            .optional()?;
        Ok(user)
    }

    /// Resolves a client supplied id by exact match. Missing or malformed ids
    /// can't name a user so they resolve to `None` rather than an error
    pub fn lookup(conn: &Connection, id: Option<&str>) -> Result<Option<User>, ServerError> {
        match id.and_then(Uuid::parse) {
            Some(id) => User::fetch_by_id(conn, &id),
            None => Ok(None),
        }
    }

    pub fn create(conn: &mut Connection, new_user: NewUser) -> Result<User, ServerError> {
        let tx = conn.transaction()?;
        let user = {
            new_user.insert(&tx).map_err(|e| {
                if is_unique_violation(&e) {
                    ServerError::duplicate_key(USERNAME_UNAVAILABLE)
                } else {
                    e.into()
                }
            })?;
            User::fetch_by_id(&tx, &new_user.id)?
                .ok_or_else(|| internal_error!("User {} missing after insert", new_user.id))?
        };
        tx.commit()?;

        Ok(user)
    }
}
