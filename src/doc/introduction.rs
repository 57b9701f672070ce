/*!
# Introductory Tutorial for Rust Slots

Start the machine from a terminal. You begin with $100. Type CTRL-D or
CTRL-C at any prompt to cash out.
<pre><code>&nbsp;  ==========================
&nbsp;     Welcome to Rust Slots
&nbsp;     Symbols: 🍒 🍉 🥭 🔔 ⭐
&nbsp;  ==========================
&nbsp;  Current balance: $100
&nbsp;  Place your bet amount: █
</code></pre>

Every round begins with a bet. The bet is taken from your balance before
the reels spin. For this tutorial, I'll mark lines that you type with a
"`>`". Go ahead and place your first bet.

<pre><code>&nbsp;> Place your bet amount: 20
&nbsp;  Spinning...
&nbsp;  **************
&nbsp;   🍒 | 🍒 | 🥭
&nbsp;  **************
&nbsp;  You won $40!
&nbsp;  Do you want to play again? (Y/N):
</code></pre>

The two cherries on the left paid twice the bet. The rules for what pays
are in the next chapter. Answer `Y` to keep playing. Any other answer
ends the session.

<pre><code>&nbsp;> Do you want to play again? (Y/N): n
&nbsp;  GAME OVER! Your final balance is $120
&nbsp;  Rounds: 1  Wagered: $20  Won: $40  Biggest win: $40
</code></pre>

A bet must be a whole number greater than zero and no more than your
balance. Anything else is refused and you are asked again. Nothing is
taken from your balance for a refused bet.

<pre><code>&nbsp;> Place your bet amount: 150
&nbsp;  ?INVALID WAGER; INSUFFICIENT FUNDS
&nbsp;  Current balance: $100
&nbsp;> Place your bet amount: ten
&nbsp;  ?MALFORMED INPUT; ENTER A WHOLE NUMBER
</code></pre>

When your balance reaches zero the game is over. You won't be asked
to play again.

## Options

```text
slots --balance 500   Start with $500.
slots --reels 5       Spin five reels instead of three.
slots -vv             Log each round to stderr.
```
*/
