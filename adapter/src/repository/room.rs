use crate::database::{
    model::room::{PaginatedRoomRow, RoomRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    list::PaginatedList,
    room::{
        event::{CreateRoom, DeleteRoom, UpdateRoom},
        Room, RoomListOptions,
    },
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<RoomId> {
        let room_id = RoomId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO rooms
                (room_id, room_number, description, max_capacity,
                price_per_night, is_available)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(room_id)
        .bind(&event.room_number)
        .bind(&event.description)
        .bind(event.max_capacity)
        .bind(event.price_per_night)
        .bind(event.is_available)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No room record has been created".into(),
            ));
        }

        Ok(room_id)
    }

    // 総件数と該当ページの room_id を先に取り、そのあと実データを引く
    async fn find_all(&self, options: RoomListOptions) -> AppResult<PaginatedList<Room>> {
        let RoomListOptions {
            limit,
            offset,
            available,
        } = options;

        let rows: Vec<PaginatedRoomRow> = sqlx::query_as(
            r#"
                SELECT
                    COUNT(*) OVER() AS total,
                    room_id
                FROM rooms
                WHERE ($1::boolean IS NULL OR is_available = $1)
                ORDER BY room_number ASC
                LIMIT $2
                OFFSET $3
            "#,
        )
        .bind(available)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let total = rows.first().map(|r| r.total).unwrap_or_default();
        let room_ids = rows.into_iter().map(|r| r.room_id.raw()).collect::<Vec<_>>();

        let rows: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    room_id,
                    room_number,
                    description,
                    max_capacity,
                    price_per_night,
                    is_available
                FROM rooms
                WHERE room_id = ANY($1)
                ORDER BY room_number ASC
            "#,
        )
        .bind(&room_ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(PaginatedList {
            total,
            limit,
            offset,
            items: rows.into_iter().map(Room::from).collect(),
        })
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    room_id,
                    room_number,
                    description,
                    max_capacity,
                    price_per_night,
                    is_available
                FROM rooms
                WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Room::from))
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE rooms
                SET
                    room_number = $1,
                    description = $2,
                    max_capacity = $3,
                    price_per_night = $4,
                    is_available = $5
                WHERE room_id = $6
            "#,
        )
        .bind(&event.room_number)
        .bind(&event.description)
        .bind(event.max_capacity)
        .bind(event.price_per_night)
        .bind(event.is_available)
        .bind(event.room_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "指定された客室が見つかりませんでした。".into(),
            ));
        }

        Ok(())
    }

    // 予約実績のない客室は行ごと削除し、
    // 予約明細から参照されている客室は is_available = false に切り替える
    async fn delete(&self, event: DeleteRoom) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let referenced: bool = sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM booking_details WHERE room_id = $1
                )
            "#,
        )
        .bind(event.room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let res = if referenced {
            sqlx::query(
                r#"
                    UPDATE rooms SET is_available = FALSE WHERE room_id = $1
                "#,
            )
            .bind(event.room_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?
        } else {
            sqlx::query(
                r#"
                    DELETE FROM rooms WHERE room_id = $1
                "#,
            )
            .bind(event.room_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?
        };

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "指定された客室が見つかりませんでした。".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}
