use anyhow::{bail, Context};
use clap::Args;
use estatetrust::{
    storage::Storage,
    store::Store,
    view::{
        self, AssetForm, BeneficiaryForm, CreateForm, Dashboard, LoginView, MonetaryForm,
        RegisterView, Route, ToastKind, TrusteeForm, Ui,
    },
    Client,
};
use std::time::Instant;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long, env = "ESTATETRUST_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    first_name: String,
    #[arg(long, default_value = "")]
    middle_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long)]
    phone_number: String,
    /// Formatted as YYYY-MM-DD
    #[arg(long)]
    date_of_birth: String,
    /// male, female or other
    #[arg(long)]
    gender: String,
}

#[derive(Args, Debug)]
pub struct AssetArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    location: String,
    /// Id of the beneficiary
    #[arg(long)]
    will_to: String,
    #[arg(long)]
    note: String,
}

impl AssetArgs {
    pub fn into_form(self) -> AssetForm {
        AssetForm {
            name: self.name,
            location: self.location,
            will_to: self.will_to,
            note: self.note,
        }
    }
}

#[derive(Args, Debug)]
pub struct MonetaryArgs {
    #[arg(long)]
    acc_name: String,
    #[arg(long)]
    acc_number: String,
    #[arg(long)]
    amount: String,
    #[arg(long)]
    bank_name: String,
    /// Id of the beneficiary
    #[arg(long)]
    will_to: String,
    #[arg(long)]
    note: String,
}

impl MonetaryArgs {
    pub fn into_form(self) -> MonetaryForm {
        MonetaryForm {
            acc_name: self.acc_name,
            acc_number: self.acc_number,
            amount: self.amount,
            bank_name: self.bank_name,
            will_to: self.will_to,
            note: self.note,
        }
    }
}

#[derive(Args, Debug)]
pub struct BeneficiaryArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long, default_value = "")]
    middle_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long)]
    relation: String,
}

impl BeneficiaryArgs {
    pub fn into_form(self) -> BeneficiaryForm {
        BeneficiaryForm {
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            relation: self.relation,
        }
    }
}

#[derive(Args, Debug)]
pub struct TrusteeArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long, default_value = "")]
    middle_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone_number: String,
    /// Login password of the trustee
    #[arg(long, env = "ESTATETRUST_TRUSTEE_PASSWORD", hide_env_values = true)]
    password: String,
    /// brother, friend, lawyer or sister
    #[arg(long)]
    relation: String,
    #[arg(long, default_value = "")]
    note: String,
}

impl TrusteeArgs {
    pub fn into_form(self) -> TrusteeForm {
        TrusteeForm {
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            phone_number: self.phone_number,
            password: self.password,
            relation: self.relation,
            note: self.note,
        }
    }
}

/// The state a single invocation works on.
#[derive(Debug, Default)]
pub struct App {
    ui: Ui,
    store: Store,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn login<S: Storage>(
        &mut self,
        client: &mut Client<S>,
        username: String,
        password: String,
        account_type: String,
    ) -> anyhow::Result<()> {
        self.ui.navigate(Route::Login);
        let mut login = LoginView {
            username,
            password,
            account_type,
            ..LoginView::default()
        };
        let result = login
            .submit(&mut self.ui, &mut self.store, client, Instant::now())
            .await;
        self.flush();
        let session = result?;
        println!("Signed in as {} {}.", session.account_type, session.id);
        Ok(())
    }

    pub async fn logout<S: Storage>(&mut self, client: &mut Client<S>) -> anyhow::Result<()> {
        view::logout(&mut self.ui, &mut self.store, client).await?;
        println!("Signed out.");
        Ok(())
    }

    pub async fn register<S: Storage>(
        &mut self,
        client: &mut Client<S>,
        args: RegisterArgs,
    ) -> anyhow::Result<()> {
        self.ui.navigate(Route::Register);
        let mut register = RegisterView {
            first_name: args.first_name,
            middle_name: args.middle_name,
            last_name: args.last_name,
            username: args.username,
            email: args.email,
            phone_number: args.phone_number,
            date_of_birth: args.date_of_birth,
            gender: args.gender,
            password: args.password,
            ..RegisterView::default()
        };
        let result = register
            .submit(&mut self.ui, &mut self.store, client, Instant::now())
            .await;
        self.flush();
        result?;
        println!("Sign in with `estatetrust login`.");
        Ok(())
    }

    pub async fn dashboard<S: Storage>(&mut self, client: &mut Client<S>) -> anyhow::Result<()> {
        let dashboard = self.mount(client).await?;
        if let Some(trustee) = self.store.profile.trustee() {
            println!("Trustee {} ({})", trustee.display_name(), trustee.username);
            return Ok(());
        }
        if let Some(profile) = self.store.profile.profile() {
            println!("{} ({})", profile.display_name(), profile.email);
        }

        print_table(
            "Physical assets",
            &["ID", "NAME", "LOCATION", "WILL TO", "NOTE"],
            dashboard
                .asset_rows(&self.store)
                .into_iter()
                .map(|v| vec![v.id, v.name, v.location, v.will_to, v.note])
                .collect(),
        );
        print_table(
            "Monetary assets",
            &["ID", "ACCOUNT", "NUMBER", "AMOUNT", "BANK", "WILL TO", "NOTE"],
            dashboard
                .monetary_rows(&self.store)
                .into_iter()
                .map(|v| {
                    vec![
                        v.id,
                        v.acc_name,
                        v.acc_number,
                        v.amount,
                        v.bank_name,
                        v.will_to,
                        v.note,
                    ]
                })
                .collect(),
        );
        print_table(
            "Trustees",
            &["ID", "NAME", "USERNAME", "EMAIL", "PHONE", "RELATION"],
            dashboard
                .trustee_rows(&self.store)
                .into_iter()
                .map(|v| vec![v.id, v.name, v.username, v.email, v.phone_number, v.relation])
                .collect(),
        );
        print_table(
            "Beneficiaries",
            &["ID", "NAME", "RELATION"],
            dashboard
                .beneficiary_rows(&self.store)
                .into_iter()
                .map(|v| vec![v.id, v.name, v.relation])
                .collect(),
        );
        Ok(())
    }

    pub async fn add<S: Storage, F: CreateForm>(
        &mut self,
        client: &mut Client<S>,
        mut form: F,
    ) -> anyhow::Result<()> {
        self.ui.navigate(F::ROUTE);
        let grantor_id = self.session_id(client).await?;
        let result = view::submit(&mut form, &mut self.ui, &mut self.store, client, &grantor_id)
            .await;
        self.flush();
        let response = result?;
        if let Some(id) = response.uuid_pk {
            println!("{}", id);
        }
        Ok(())
    }

    pub async fn delete<S: Storage>(
        &mut self,
        client: &mut Client<S>,
        kind: view::RowKind,
        id: &str,
    ) -> anyhow::Result<()> {
        let mut dashboard = self.mount(client).await?;
        let result = dashboard
            .delete(&mut self.ui, &mut self.store, client, kind, id)
            .await;
        self.flush();
        Ok(result?)
    }

    async fn mount<S: Storage>(&mut self, client: &mut Client<S>) -> anyhow::Result<Dashboard> {
        self.ui.navigate(Route::Dashboard);
        let mut dashboard = Dashboard::new();
        dashboard.mount(&mut self.store, client).await?;
        if dashboard.session_id().is_none() {
            bail!("not signed in, run `estatetrust login` first");
        }
        Ok(dashboard)
    }

    async fn session_id<S: Storage>(&self, client: &Client<S>) -> anyhow::Result<String> {
        client
            .storage()
            .session_id()
            .await
            .context("failed to read session")?
            .context("not signed in, run `estatetrust login` first")
    }

    /// Prints and discards the pending toasts.
    fn flush(&mut self) {
        for toast in self.ui.drain_toasts() {
            match toast.kind {
                ToastKind::Success => println!("{}", toast),
                ToastKind::Error => eprintln!("{}", toast),
            }
        }
        tracing::debug!(route = %self.ui.route(), "view settled");
    }
}

pub fn print_routes() {
    for route in Route::ALL {
        println!("{}", route);
    }
}

fn print_table(title: &str, header: &[&str], rows: Vec<Vec<String>>) {
    println!();
    println!("{}", title);
    if rows.is_empty() {
        println!("  (none)");
        return;
    }
    let mut widths: Vec<usize> = header.iter().map(|v| v.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };
    println!("  {}", line(header.to_vec()));
    for row in &rows {
        println!("  {}", line(row.iter().map(String::as_str).collect()));
    }
}
