/*!
# Paying Lines

Each reel lands on one symbol. The reels are independent so the same
symbol can come up on every reel. Only one line pays per spin, checked
in this order:

1. Every reel shows the same symbol. Pays the full multiplier.
2. The first two reels match. Pays the pair multiplier.
3. The last two reels match. Pays the pair multiplier.

The first line that matches is the only one that pays. A row like
`🍒 | 🍉 | 🍒` pays nothing because the cherries aren't next to each
other.

| Symbol | Full row | Pair |
|--------|---------:|-----:|
| 🍒     | 3x       | 2x   |
| 🍉     | 4x       | 3x   |
| 🥭     | 5x       | 4x   |
| 🔔     | 10x      | 5x   |
| ⭐     | 20x      | 10x  |

The payout is the multiplier times your bet and is added to your
balance after the spin. Your bet is not returned on top of it.

## Example
```text
Bet 20 on ⭐ | ⭐ | ⭐   pays 400
Bet 50 on 🍒 | 🍒 | 🥭   pays 100
Bet 10 on 🍉 | 🔔 | 🔔   pays 50
Bet 10 on 🍉 | 🔔 | 🥭   pays 0
```

With `--reels 5` the same three lines are checked. The pairs are still
the first two and the last two reels.
*/
