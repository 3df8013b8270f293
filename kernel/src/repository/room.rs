use crate::model::{
    id::RoomId,
    list::PaginatedList,
    room::{
        event::{CreateRoom, DeleteRoom, UpdateRoom},
        Room, RoomListOptions,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    // 客室を登録する
    async fn create(&self, event: CreateRoom) -> AppResult<RoomId>;
    // 客室の一覧を取得する（空室のみの絞り込みが可能）
    async fn find_all(&self, options: RoomListOptions) -> AppResult<PaginatedList<Room>>;
    // room_id に紐づく客室を取得する
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
    // 客室情報を更新する
    async fn update(&self, event: UpdateRoom) -> AppResult<()>;
    // 客室を削除する。予約実績がある客室は利用停止に切り替える
    async fn delete(&self, event: DeleteRoom) -> AppResult<()>;
}
