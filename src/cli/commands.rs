use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "blockforge")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "mine",
        about = "Assemble and mine one block from pending transactions"
    )]
    Mine {
        #[arg(
            long,
            default_value = "./mempool",
            help = "Directory of candidate transaction records"
        )]
        mempool: PathBuf,
        #[arg(
            long,
            default_value = "output.txt",
            help = "File the finished block is written to"
        )]
        output: PathBuf,
        #[arg(long, help = "Difficulty target as a big hex integer")]
        target: Option<String>,
        #[arg(long, help = "Block subsidy added to collected fees")]
        reward: Option<u64>,
        #[arg(long = "prev-hash", help = "Previous block hash (64 hex chars)")]
        prev_hash: Option<String>,
        #[arg(
            long = "payout-address",
            help = "Base58check address named in the coinbase output"
        )]
        payout_address: Option<String>,
    },
    #[command(
        name = "validate",
        about = "Validate pending transactions without mining"
    )]
    Validate {
        #[arg(
            long,
            default_value = "./mempool",
            help = "Directory of candidate transaction records"
        )]
        mempool: PathBuf,
    },
}
