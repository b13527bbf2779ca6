use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> MySqlPool {
    let pool = MySqlPool::connect(database_url)
        .await
        .expect("Failed to connect to database");

    ensure_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    pool
}

/// Create the tables on first start. The FK carries ON DELETE CASCADE as a
/// store-level backstop; the registry still deletes attendance explicitly.
async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            employee_id VARCHAR(50) NOT NULL PRIMARY KEY,
            full_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            department VARCHAR(100) NOT NULL,
            created_at DATETIME NOT NULL,
            UNIQUE KEY uq_employees_email (email)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id VARCHAR(50) NOT NULL PRIMARY KEY,
            employee_id VARCHAR(50) NOT NULL,
            date DATE NOT NULL,
            status VARCHAR(10) NOT NULL,
            created_at DATETIME NOT NULL,
            UNIQUE KEY uq_attendance_employee_date (employee_id, date),
            KEY idx_attendance_date (date),
            CONSTRAINT fk_attendance_employee FOREIGN KEY (employee_id)
                REFERENCES employees (employee_id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // single-row counter behind EMPnnn assignment; next_val holds the last
    // number handed out
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employee_id_seq (
            id TINYINT NOT NULL PRIMARY KEY,
            next_val BIGINT UNSIGNED NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("INSERT IGNORE INTO employee_id_seq (id, next_val) VALUES (1, 0)")
        .execute(pool)
        .await?;

    Ok(())
}
