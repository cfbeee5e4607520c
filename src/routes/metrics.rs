use actix_web::HttpResponse;
use serde::Serialize;

/// Mock engineering metrics shown on the portfolio site. The payload is
/// fixed data; every call returns the identical structure.

#[derive(Debug, Serialize)]
pub struct EngineeringMetrics {
    pub builds: BuildMetrics,
    pub tests: TestMetrics,
    pub deploy: DeployMetrics,
}

#[derive(Debug, Serialize)]
pub struct BuildMetrics {
    pub total: u32,
    pub success_rate: f64,
    pub avg_duration: &'static str,
    pub last_24h: u32,
}

#[derive(Debug, Serialize)]
pub struct TestMetrics {
    pub coverage: f64,
    pub total_tests: u32,
    pub passing: u32,
    pub failing: u32,
}

#[derive(Debug, Serialize)]
pub struct DeployMetrics {
    pub last_deployment: &'static str,
    pub uptime: f64,
    pub rollbacks: u32,
    pub avg_deploy_time: &'static str,
}

pub fn metrics_snapshot() -> EngineeringMetrics {
    EngineeringMetrics {
        builds: BuildMetrics {
            total: 1247,
            success_rate: 98.2,
            avg_duration: "2m 34s",
            last_24h: 23,
        },
        tests: TestMetrics {
            coverage: 87.3,
            total_tests: 1842,
            passing: 1801,
            failing: 41,
        },
        deploy: DeployMetrics {
            last_deployment: "2024-01-15T14:30:00Z",
            uptime: 99.9,
            rollbacks: 2,
            avg_deploy_time: "4m 12s",
        },
    }
}

pub async fn engineering_metrics() -> HttpResponse {
    HttpResponse::Ok().json(metrics_snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_deterministic() {
        let first = serde_json::to_value(metrics_snapshot()).unwrap();
        let second = serde_json::to_value(metrics_snapshot()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn snapshot_carries_the_fixed_payload() {
        let value = serde_json::to_value(metrics_snapshot()).unwrap();

        assert_eq!(value["builds"]["total"], 1247);
        assert_eq!(value["tests"]["coverage"], 87.3);
        assert_eq!(value["deploy"]["rollbacks"], 2);
        assert_eq!(value["deploy"]["last_deployment"], "2024-01-15T14:30:00Z");
    }
}
