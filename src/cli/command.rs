use clap::Subcommand;

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Create an account", alias = "new")]
    Add {
        #[arg(required = true)]
        username: String,
        #[arg(required = true)]
        email: String,
        #[arg(required = true)]
        screen_name: String,
        #[arg(required = true)]
        password: String,
    },
    #[command(about = "Delete an account and its credential", alias = "rm")]
    Remove {
        #[arg(required = true)]
        username: String,
    },
    #[command(about = "List every username", alias = "ls")]
    List,
    #[command(about = "Print the profile of an account")]
    Show {
        #[arg(required = true)]
        username: String,
    },
    #[command(about = "Check a password against the stored credential")]
    Auth {
        #[arg(required = true)]
        username: String,
        #[arg(required = true)]
        password: String,
    },
    #[command(about = "Change the username of an account", alias = "mv")]
    Rename {
        #[arg(required = true)]
        username: String,
        #[arg(required = true)]
        new_username: String,
    },
    #[command(about = "Change the email of an account")]
    Email {
        #[arg(required = true)]
        username: String,
        #[arg(required = true)]
        new_email: String,
    },
    #[command(about = "Change the screen name of an account")]
    ScreenName {
        #[arg(required = true)]
        username: String,
        #[arg(required = true)]
        new_screen_name: String,
    },
    #[command(about = "Replace the password of an account")]
    Password {
        #[arg(required = true)]
        username: String,
        #[arg(required = true)]
        new_password: String,
    },
    #[command(about = "Check that the database is reachable")]
    Ping,
}
