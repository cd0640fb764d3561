mod authentications_tests;
mod comments_tests;
mod replies_tests;
mod threads_tests;
mod users_tests;
