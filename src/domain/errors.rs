//! Invariant violations raised by entity validators.
//!
//! Every variant carries a stable identifier (its `Display` output, e.g.
//! `ADD_THREAD.TITLE_LIMIT_CHAR`) and a human-readable template returned by
//! [`InvariantError::message`]. The template table is an exhaustive `match`,
//! so adding a variant without a translation does not compile.

/// A payload failed the required-field, type or domain-rule checks of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    // Users
    #[error("REGISTER_USER.NOT_CONTAIN_NEEDED_PROPERTY")]
    RegisterUserMissingProperty,
    #[error("REGISTER_USER.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    RegisterUserInvalidType,
    #[error("REGISTER_USER.USERNAME_LIMIT_CHAR")]
    RegisterUserUsernameTooLong,
    #[error("REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER")]
    RegisterUserUsernameRestrictedCharacter,
    #[error("REGISTERED_USER.NOT_CONTAIN_NEEDED_PROPERTY")]
    RegisteredUserMissingProperty,
    #[error("REGISTERED_USER.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    RegisteredUserInvalidType,

    // Authentications
    #[error("USER_LOGIN.NOT_CONTAIN_NEEDED_PROPERTY")]
    UserLoginMissingProperty,
    #[error("USER_LOGIN.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    UserLoginInvalidType,
    #[error("NEW_AUTH.NOT_CONTAIN_NEEDED_PROPERTY")]
    NewAuthMissingProperty,
    #[error("NEW_AUTH.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    NewAuthInvalidType,
    #[error("REFRESH_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN")]
    RefreshAuthenticationMissingToken,
    #[error("REFRESH_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION")]
    RefreshAuthenticationInvalidType,
    #[error("DELETE_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN")]
    DeleteAuthenticationMissingToken,
    #[error("DELETE_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION")]
    DeleteAuthenticationInvalidType,

    // Threads
    #[error("ADD_THREAD.NOT_CONTAIN_NEEDED_PROPERTY")]
    AddThreadMissingProperty,
    #[error("ADD_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    AddThreadInvalidType,
    #[error("ADD_THREAD.TITLE_LIMIT_CHAR")]
    AddThreadTitleTooLong,
    #[error("ADDED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY")]
    AddedThreadMissingProperty,
    #[error("ADDED_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    AddedThreadInvalidType,
    #[error("GET_THREAD.NOT_CONTAIN_NEEDED_PROPERTY")]
    GetThreadMissingProperty,
    #[error("GET_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    GetThreadInvalidType,

    // Comments
    #[error("ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY")]
    AddCommentMissingProperty,
    #[error("ADD_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    AddCommentInvalidType,
    #[error("ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY")]
    AddedCommentMissingProperty,
    #[error("ADDED_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    AddedCommentInvalidType,
    #[error("GET_COMMENTS.NOT_CONTAIN_NEEDED_PROPERTY")]
    GetCommentsMissingProperty,
    #[error("GET_COMMENTS.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    GetCommentsInvalidType,
    #[error("DELETE_COMMENT_USE_CASE.NOT_CONTAIN_VALID_PAYLOAD")]
    DeleteCommentMissingPayload,
    #[error("DELETE_COMMENT_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION")]
    DeleteCommentInvalidType,

    // Replies
    #[error("ADD_REPLY.NOT_CONTAIN_NEEDED_PROPERTY")]
    AddReplyMissingProperty,
    #[error("ADD_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    AddReplyInvalidType,
    #[error("ADDED_REPLY.NOT_CONTAIN_NEEDED_PROPERTY")]
    AddedReplyMissingProperty,
    #[error("ADDED_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    AddedReplyInvalidType,
    #[error("GET_REPLIES.NOT_CONTAIN_NEEDED_PROPERTY")]
    GetRepliesMissingProperty,
    #[error("GET_REPLIES.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    GetRepliesInvalidType,
    #[error("DELETE_REPLY_USE_CASE.NOT_CONTAIN_VALID_PAYLOAD")]
    DeleteReplyMissingPayload,
    #[error("DELETE_REPLY_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION")]
    DeleteReplyInvalidType,
}

impl InvariantError {
    /// Human-readable message shown to API clients.
    pub fn message(&self) -> &'static str {
        match self {
            Self::RegisterUserMissingProperty => {
                "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada"
            }
            Self::RegisterUserInvalidType => {
                "tidak dapat membuat user baru karena tipe data tidak sesuai"
            }
            Self::RegisterUserUsernameTooLong => {
                "tidak dapat membuat user baru karena karakter username melebihi batas limit"
            }
            Self::RegisterUserUsernameRestrictedCharacter => {
                "tidak dapat membuat user baru karena username mengandung karakter terlarang"
            }
            Self::RegisteredUserMissingProperty => {
                "gagal memproses user, properti yang dibutuhkan tidak ada"
            }
            Self::RegisteredUserInvalidType => "gagal memproses user, tipe data tidak sesuai",

            Self::UserLoginMissingProperty => "harus mengirimkan username dan password",
            Self::UserLoginInvalidType => "username dan password harus string",
            Self::NewAuthMissingProperty => {
                "gagal membuat autentikasi, token yang dibutuhkan tidak ada"
            }
            Self::NewAuthInvalidType => "gagal membuat autentikasi, tipe data token tidak sesuai",
            Self::RefreshAuthenticationMissingToken | Self::DeleteAuthenticationMissingToken => {
                "harus mengirimkan token refresh"
            }
            Self::RefreshAuthenticationInvalidType | Self::DeleteAuthenticationInvalidType => {
                "refresh token harus string"
            }

            Self::AddThreadMissingProperty | Self::AddedThreadMissingProperty => {
                "gagal membuat thread baru, beberapa properti yang dibutuhkan tidak ada"
            }
            Self::AddThreadInvalidType | Self::AddedThreadInvalidType => {
                "gagal membuat thread baru, tipe data tidak sesuai"
            }
            Self::AddThreadTitleTooLong => {
                "tidak dapat membuat thread baru karena jumlah karakter pada field title melebihi limit"
            }
            Self::GetThreadMissingProperty => {
                "gagal mendapatkan thread, beberapa properti yang dibutuhkan tidak ada"
            }
            Self::GetThreadInvalidType => "gagal mendapatkan thread, tipe data tidak sesuai",

            Self::AddCommentMissingProperty | Self::AddedCommentMissingProperty => {
                "gagal membuat komentar baru, beberapa properti yang dibutuhkan tidak ada"
            }
            Self::AddCommentInvalidType | Self::AddedCommentInvalidType => {
                "gagal membuat komentar baru, tipe data tidak sesuai"
            }
            Self::GetCommentsMissingProperty => {
                "gagal mendapatkan komentar, beberapa properti yang dibutuhkan tidak ada"
            }
            Self::GetCommentsInvalidType => "gagal mendapatkan komentar, tipe data tidak sesuai",
            Self::DeleteCommentMissingPayload => {
                "gagal menghapus komentar, beberapa properti yang dibutuhkan tidak ada"
            }
            Self::DeleteCommentInvalidType => "gagal menghapus komentar, tipe data tidak sesuai",

            Self::AddReplyMissingProperty | Self::AddedReplyMissingProperty => {
                "gagal membuat reply baru, beberapa properti yang dibutuhkan tidak ada"
            }
            Self::AddReplyInvalidType | Self::AddedReplyInvalidType => {
                "gagal membuat reply baru, tipe data tidak sesuai"
            }
            Self::GetRepliesMissingProperty => {
                "gagal mendapatkan balasan, beberapa properti yang dibutuhkan tidak ada"
            }
            Self::GetRepliesInvalidType => "gagal mendapatkan balasan, tipe data tidak sesuai",
            Self::DeleteReplyMissingPayload => {
                "gagal menghapus balasan, beberapa properti yang dibutuhkan tidak ada"
            }
            Self::DeleteReplyInvalidType => "gagal menghapus balasan, tipe data tidak sesuai",
        }
    }
}
