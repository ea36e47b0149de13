mod children;
mod delete;
mod folders;
mod share;
mod upload;
