#[cfg(test)]
mod tests {
    use crate::errors::api::FooApiError;
    use crate::errors::internal::{DatabaseError, FooError, InternalError};
    use crate::validation::ValidationErrors;
    use sea_orm::DbErr;

    const PATH: &str = "/api/v1/foos/42";

    #[test]
    fn test_not_found_maps_to_404_with_verbatim_message() {
        let err = InternalError::Foo(FooError::NotFound { id: 42 });
        let api_err = FooApiError::from_internal_error(err, PATH);

        assert!(matches!(api_err, FooApiError::NotFound(_)));
        let body = api_err.body();
        assert_eq!(body.status_code, 404);
        assert_eq!(body.status_text, "Not Found");
        assert_eq!(body.detail, "Foo not found with id: 42");
        assert_eq!(body.path, PATH);
    }

    #[test]
    fn test_validation_maps_to_400_with_field_map_text() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Name cannot be blank");
        let api_err = FooApiError::from_internal_error(InternalError::Validation(errors), "/api/v1/foos");

        assert!(matches!(api_err, FooApiError::ValidationFailed(_)));
        let body = api_err.body();
        assert_eq!(body.status_code, 400);
        assert_eq!(body.status_text, "Validation Failed");
        assert_eq!(body.detail, "{name=Name cannot be blank}");
    }

    #[test]
    fn test_database_error_maps_to_500_without_leaking_cause() {
        let db_err = DbErr::Custom("connection refused at 10.0.0.5".to_string());
        let api_err = FooApiError::from_internal_error(InternalError::database("save_foo", db_err), PATH);

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.body().status_text, "Internal Server Error");
        assert_eq!(api_err.message(), "An internal error occurred");
    }

    #[test]
    fn test_migration_error_maps_to_500_without_leaking_cause() {
        let err: InternalError = DatabaseError::Migration {
            source: DbErr::Migration("duplicate column name".to_string()),
        }
        .into();
        let api_err = FooApiError::from_internal_error(err, PATH);

        assert!(matches!(api_err, FooApiError::InternalError(_)));
        assert_eq!(api_err.message(), "An internal error occurred");
        assert_eq!(api_err.body().path, PATH);
    }

    #[test]
    fn test_error_body_has_rfc3339_timestamp() {
        let api_err = FooApiError::not_found("missing", PATH);
        let ts = &api_err.body().timestamp;

        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }
}
