//! Contents of the generated files.

use crate::core::config::ScaffoldConfig;
use crate::core::constants::INITDB_DIR;
use crate::core::secret::Secret;

/// Compose `.env`: the superuser password and the project name.
pub fn dotenv(config: &ScaffoldConfig, postgres: &Secret) -> String {
    format!(
        "PG_PASS='{}'\nCOMPOSE_PROJECT_NAME={}\n",
        postgres.expose(),
        config.project_name
    )
}

/// `docker-compose.yml` with a single postgres service.
///
/// The password is read from `${PG_PASS}` in `.env`, never inlined.
pub fn docker_compose(config: &ScaffoldConfig) -> String {
    format!(
        r#"services:
    postgres:
        image: {image}
        container_name: {container}
        environment:
            POSTGRES_PASSWORD: ${{PG_PASS}}

        ports:
            - "{host}:{port}:5432"

        volumes:
            - {volume}:/var/lib/postgresql/data
            - ./{initdb}:/docker-entrypoint-initdb.d:ro

        restart: always


volumes:
    {volume}:
"#,
        image = config.image,
        container = config.container_name,
        host = config.host,
        port = config.port,
        volume = config.volume,
        initdb = INITDB_DIR,
    )
}

/// `initdb/01_init.sql`: database, restricted login role, schema and grants.
pub fn init_sql(config: &ScaffoldConfig, app: &Secret) -> String {
    format!(
        r#"create database {db};

create role {user} with
    login
    password '{password}'
    nosuperuser
    createdb
    nocreaterole
    noreplication
    nobypassrls
;

\connect {db}

create schema if not exists {schema};

revoke all on schema public from public;

grant usage on schema {schema} to {user};
grant create on schema {schema} to {user};
alter role {user} in database {db} set search_path = {schema}, public;

alter default privileges in schema {schema}
    grant select, insert, update, delete on tables to {user};

alter default privileges in schema {schema}
    grant usage, select on sequences to {user};

alter default privileges in schema {schema}
    grant execute on functions to {user};
"#,
        db = config.database,
        user = config.app_user,
        schema = config.schema,
        password = app.expose(),
    )
}

/// `.passwords` backup holding both secrets in clear text.
pub fn passwords(postgres: &Secret, app: &Secret) -> String {
    format!(
        "# Passwords backup. Don't leak it\nPOSTGRES_PASSWORD=\"{}\"\nAPP_USER_PASS=\"{}\"\n",
        postgres.expose(),
        app.expose()
    )
}
