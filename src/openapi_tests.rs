#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components are generated");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            other => panic!("{name} should be an object schema, got {other:?}"),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();
        for name in [
            "ErrorResponse",
            "HealthResponse",
            "Datasets",
            "SalesComparison",
            "SalesRecord",
            "MonthlySummary",
        ] {
            assert!(components.schemas.contains_key(name), "missing schema {name}");
        }

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        for field in ["error", "code", "success"] {
            assert!(properties.iter().any(|p| p == field), "missing {field}");
        }
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");
        for field in ["status", "version", "database"] {
            assert!(properties.iter().any(|p| p == field), "missing {field}");
        }
    }

    #[test]
    fn test_monthly_summary_schema_structure() {
        let properties = object_properties("MonthlySummary");
        for field in [
            "month",
            "total_sales_income",
            "exempt_sales",
            "zero_rated_sales",
            "gst_taxable_sales",
        ] {
            assert!(properties.iter().any(|p| p == field), "missing {field}");
        }
    }

    #[test]
    fn test_reporting_paths_are_documented() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/v1/datasets"));
        assert!(paths.contains_key("/api/v1/gst/sales-comparison"));
    }

    #[test]
    fn test_sales_comparison_documents_query_parameters() {
        let openapi = ApiDoc::openapi();
        let json = serde_json::to_value(&openapi).unwrap();
        let parameters = json["paths"]["/api/v1/gst/sales-comparison"]["get"]["parameters"]
            .as_array()
            .expect("query parameters are documented")
            .iter()
            .map(|p| p["name"].as_str().unwrap_or_default().to_string())
            .collect::<Vec<_>>();

        assert_eq!(parameters, vec!["tin", "start_date", "end_date"]);
    }
}
