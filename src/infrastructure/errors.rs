//! Repository failures shared by every storage backend.

use crate::shared::error::AppError;

pub fn username_taken() -> AppError {
    AppError::BadRequest("username tidak tersedia".into())
}

pub fn username_not_found() -> AppError {
    AppError::BadRequest("username tidak ditemukan".into())
}

pub fn user_not_found() -> AppError {
    AppError::BadRequest("user tidak ditemukan".into())
}

pub fn refresh_token_not_found() -> AppError {
    AppError::InvalidToken("refresh token tidak ditemukan di database".into())
}

pub fn thread_not_found() -> AppError {
    AppError::NotFound("thread tidak ditemukan!".into())
}

pub fn comment_not_found() -> AppError {
    AppError::NotFound("komentar tidak ditemukan!".into())
}

pub fn reply_not_found() -> AppError {
    AppError::NotFound("balasan tidak ditemukan!".into())
}

pub fn not_comment_owner() -> AppError {
    AppError::Forbidden("Gagal menghapus komentar, anda bukan pemilik komentar ini!".into())
}

pub fn not_reply_owner() -> AppError {
    AppError::Forbidden("Gagal menghapus pesan reply, anda bukan pemilik reply ini!.".into())
}
