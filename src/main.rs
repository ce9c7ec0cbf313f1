// AWS Lambda binary entry point
//
// The lambda_runtime crate drives the tokio runtime, so we use #[tokio::main]

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    kendra_cfn::run().await
}
