mod create_service_account;
mod resolve_project;

#[cfg(test)]
mod fakes;

pub use create_service_account::CreateServiceAccountUseCase;
pub use resolve_project::ResolveProjectUseCase;
