use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A note/reminder card. The only persisted resource of the API.
///
/// `id` is assigned at insert time and never reassigned; both timestamps are
/// caller-supplied (the service fills in "now" for omitted ones).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub scheduled_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    title: &str,
    description: &str,
    created_at: DateTimeWithTimeZone,
    scheduled_at: DateTimeWithTimeZone,
) -> Result<Model, DbErr> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        created_at: Set(created_at),
        scheduled_at: Set(scheduled_at),
    };
    am.insert(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn model_serializes_timestamps_as_rfc3339() {
        let at: DateTimeWithTimeZone = "2024-07-11T09:30:00+00:00".parse().unwrap();
        let m = Model {
            id: Uuid::new_v4(),
            title: "T".into(),
            description: "D".into(),
            created_at: at,
            scheduled_at: at,
        };
        let json = serde_json::to_value(&m).unwrap();
        let round: DateTime<Utc> = json["created_at"].as_str().unwrap().parse().unwrap();
        assert_eq!(round, at.with_timezone(&Utc));
        assert!(json["id"].is_string());
    }
}
