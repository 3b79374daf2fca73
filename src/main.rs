// Entry point for the block assembler CLI
use blockforge::{
    BlockAssembler, CancelToken, Command, Config, FeeCalculator, MempoolLoader, Opt, OutputSink,
    TransactionValidator,
};
use clap::Parser;
use log::{error, LevelFilter};
use std::process;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // One full assembly run: load, validate, mine, write
        Command::Mine {
            mempool,
            output,
            target,
            reward,
            prev_hash,
            payout_address,
        } => {
            // CLI flags win over environment overrides and defaults
            let mut config = Config::new();
            if let Some(target) = target {
                config.difficulty_target = target;
            }
            if let Some(reward) = reward {
                config.block_reward = reward;
            }
            if let Some(prev_hash) = prev_hash {
                config.previous_block_hash = prev_hash;
            }
            if let Some(address) = payout_address {
                config.payout.scriptpubkey_address = address;
            }
            config.validate()?;

            let (candidates, malformed) = MempoolLoader::new(mempool.as_path()).load()?;

            let assembler = BlockAssembler::new(config);
            let (block, summary) = assembler.assemble(candidates, malformed, &CancelToken::new())?;

            OutputSink::new(output.as_path()).write_block(&block)?;

            println!("Mined block {} at nonce {}", summary.block_hash, summary.nonce);
            println!(
                "Transactions: {} accepted, {} rejected, {} malformed (of {} records)",
                summary.accepted, summary.rejected, summary.malformed, summary.total_records
            );
            println!("Total fee collected: {}", summary.total_fee);
            println!("Block written to {}", output.display());
        }
        // Dry run: report what a mine run would accept, without mining
        Command::Validate { mempool } => {
            let (candidates, malformed) = MempoolLoader::new(mempool.as_path()).load()?;

            let (valid, rejected): (Vec<_>, Vec<_>) = candidates
                .into_iter()
                .partition(|tx| TransactionValidator::validate(tx));

            println!(
                "Transactions: {} valid, {} rejected, {} malformed",
                valid.len(),
                rejected.len(),
                malformed
            );
            println!("Collectable fee: {}", FeeCalculator::total_fee(&valid));
        }
    }
    Ok(())
}
